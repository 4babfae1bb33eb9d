// ntag215/src/memory/identity.rs

use std::ops::Range;

use crate::constants::{IDENTITY_BUFFER_MIN_LEN, SCRATCH_LEN, UID_LEN};
use crate::types::Uid;
use crate::{Error, Result};

/// Where the UID and the transmit scratch area live inside the identity
/// buffer. Both ranges are validated against the buffer at bind time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdentityLayout {
    pub uid: Range<usize>,
    pub scratch: Range<usize>,
}

impl Default for IdentityLayout {
    /// UID at 0..7, scratch right behind it at 7..32.
    fn default() -> Self {
        Self {
            uid: 0..UID_LEN,
            scratch: UID_LEN..UID_LEN + SCRATCH_LEN,
        }
    }
}

impl IdentityLayout {
    fn validate(&self, buffer_len: usize) -> Result<()> {
        if self.uid.len() != UID_LEN {
            return Err(Error::InvalidBuffer(format!(
                "uid range {:?} must span {} bytes",
                self.uid, UID_LEN
            )));
        }
        if self.uid.end > buffer_len || self.scratch.end > buffer_len {
            return Err(Error::InvalidBuffer(format!(
                "layout uid={:?} scratch={:?} exceeds buffer of {} bytes",
                self.uid, self.scratch, buffer_len
            )));
        }
        if self.scratch.start > self.scratch.end {
            return Err(Error::InvalidBuffer(format!(
                "scratch range {:?} is inverted",
                self.scratch
            )));
        }
        let overlaps = self.uid.start < self.scratch.end && self.scratch.start < self.uid.end;
        if overlaps && !self.scratch.is_empty() {
            return Err(Error::InvalidBuffer(format!(
                "uid {:?} overlaps scratch {:?}",
                self.uid, self.scratch
            )));
        }
        Ok(())
    }
}

/// Caller-supplied buffer receiving the derived NFCID, plus the scratch
/// area the radio layer may use for transmissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityBuffer {
    bytes: Vec<u8>,
    layout: IdentityLayout,
}

impl IdentityBuffer {
    /// Bind with the default layout (UID followed by scratch).
    pub fn new(bytes: Vec<u8>) -> Result<Self> {
        Self::with_layout(bytes, IdentityLayout::default())
    }

    pub fn with_layout(bytes: Vec<u8>, layout: IdentityLayout) -> Result<Self> {
        if bytes.len() < IDENTITY_BUFFER_MIN_LEN {
            return Err(Error::BufferTooSmall {
                expected: IDENTITY_BUFFER_MIN_LEN,
                actual: bytes.len(),
            });
        }
        layout.validate(bytes.len())?;
        Ok(Self { bytes, layout })
    }

    pub fn layout(&self) -> &IdentityLayout {
        &self.layout
    }

    pub fn uid(&self) -> Result<Uid> {
        Uid::try_from(&self.bytes[self.layout.uid.clone()])
    }

    pub fn uid_bytes(&self) -> &[u8] {
        &self.bytes[self.layout.uid.clone()]
    }

    pub fn set_uid(&mut self, uid: &Uid) {
        self.bytes[self.layout.uid.clone()].copy_from_slice(uid.as_bytes());
    }

    pub fn scratch(&self) -> &[u8] {
        &self.bytes[self.layout.scratch.clone()]
    }

    pub fn scratch_mut(&mut self) -> &mut [u8] {
        &mut self.bytes[self.layout.scratch.clone()]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
