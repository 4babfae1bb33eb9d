// ntag215/src/memory/tag.rs

use crate::constants::{
    BCC0_OFFSET, BCC1_OFFSET, DYNAMIC_PROTECTION_OFFSET, PAGE_SIZE, SIGNATURE_LEN,
    SIGNATURE_OFFSET, STATIC_LOCK_HIGH_OFFSET, STATIC_LOCK_LOW_OFFSET, TAG_MEMORY_MIN_LEN,
};
use crate::types::{PageIndex, Uid};
use crate::{Error, Result};

/// Page-addressed tag memory (NTAG215 dump layout, at least 572 bytes).
///
/// Every accessor is bounds checked against the bound length; nothing here
/// indexes past the end of the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMemory {
    bytes: Vec<u8>,
}

impl TagMemory {
    /// Take ownership of a dump. Rejects buffers shorter than 572 bytes.
    pub fn new(bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() < TAG_MEMORY_MIN_LEN {
            return Err(Error::BufferTooSmall {
                expected: TAG_MEMORY_MIN_LEN,
                actual: bytes.len(),
            });
        }
        Ok(Self { bytes })
    }

    /// A zero-filled memory of the minimum size.
    pub fn zeroed() -> Self {
        Self {
            bytes: vec![0u8; TAG_MEMORY_MIN_LEN],
        }
    }

    /// Parse a hex dump (whitespace allowed) into tag memory.
    pub fn from_hex(dump: &str) -> Result<Self> {
        let bytes = crate::utils::parse_hex(dump).map_err(Error::InvalidBuffer)?;
        Self::new(bytes)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Bounds-checked view of `len` bytes starting at `index`.
    pub fn slice(&self, index: usize, len: usize) -> Result<&[u8]> {
        self.bytes
            .get(index..index.saturating_add(len))
            .ok_or(Error::OutOfBounds {
                index,
                len: self.bytes.len(),
            })
    }

    /// Like `slice`, but clamps the end to the buffer length.
    pub fn slice_truncated(&self, index: usize, len: usize) -> &[u8] {
        let start = index.min(self.bytes.len());
        let end = index.saturating_add(len).min(self.bytes.len());
        &self.bytes[start..end]
    }

    pub fn byte(&self, index: usize) -> Result<u8> {
        self.slice(index, 1).map(|b| b[0])
    }

    pub fn page(&self, page: PageIndex) -> Result<&[u8]> {
        self.slice(page.byte_offset(), PAGE_SIZE)
    }

    /// Overwrite one page.
    pub fn write_page(&mut self, page: PageIndex, data: &[u8; PAGE_SIZE]) -> Result<()> {
        self.write_at(page.byte_offset(), data)
    }

    pub fn write_at(&mut self, index: usize, data: &[u8]) -> Result<()> {
        let len = self.bytes.len();
        let dst = self
            .bytes
            .get_mut(index..index.saturating_add(data.len()))
            .ok_or(Error::OutOfBounds { index, len })?;
        dst.copy_from_slice(data);
        Ok(())
    }

    /// Bitwise-OR `data` into memory starting at `index`.
    pub fn merge_at(&mut self, index: usize, data: &[u8]) -> Result<()> {
        let len = self.bytes.len();
        let dst = self
            .bytes
            .get_mut(index..index.saturating_add(data.len()))
            .ok_or(Error::OutOfBounds { index, len })?;
        for (d, s) in dst.iter_mut().zip(data) {
            *d |= *s;
        }
        Ok(())
    }

    /// UID bytes 0-2 and 4-7, skipping BCC0.
    pub fn uid(&self) -> Uid {
        let b = &self.bytes;
        Uid::from_bytes([b[0], b[1], b[2], b[4], b[5], b[6], b[7]])
    }

    pub fn bcc0(&self) -> u8 {
        self.bytes[BCC0_OFFSET]
    }

    pub fn bcc1(&self) -> u8 {
        self.bytes[BCC1_OFFSET]
    }

    pub fn set_check_bytes(&mut self, bcc0: u8, bcc1: u8) {
        self.bytes[BCC0_OFFSET] = bcc0;
        self.bytes[BCC1_OFFSET] = bcc1;
    }

    /// (low, high) static lock bytes
    pub fn static_lock(&self) -> (u8, u8) {
        (
            self.bytes[STATIC_LOCK_LOW_OFFSET],
            self.bytes[STATIC_LOCK_HIGH_OFFSET],
        )
    }

    pub fn dynamic_protection(&self) -> u8 {
        self.bytes[DYNAMIC_PROTECTION_OFFSET]
    }

    pub fn signature(&self) -> &[u8] {
        &self.bytes[SIGNATURE_OFFSET..SIGNATURE_OFFSET + SIGNATURE_LEN]
    }
}

// The fixed-offset accessors above index directly: `new` guarantees the
// buffer covers every offset up to the end of the signature region.
const _: () = assert!(SIGNATURE_OFFSET + SIGNATURE_LEN <= TAG_MEMORY_MIN_LEN);

impl TryFrom<Vec<u8>> for TagMemory {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        Self::new(bytes)
    }
}

impl AsRef<[u8]> for TagMemory {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
