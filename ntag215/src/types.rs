// ntag215/src/types.rs

use std::convert::TryFrom;

use derive_more::{Display, From};

use crate::Error;
use crate::constants::{PAGE_SIZE, UID_LEN};

/// Page address as sent by the reader (one byte on the wire).
#[derive(Debug, Display, From, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageIndex(u8);

impl PageIndex {
    pub const fn new(page: u8) -> Self {
        Self(page)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// First byte of this page in tag memory.
    pub fn byte_offset(&self) -> usize {
        self.0 as usize * PAGE_SIZE
    }
}

/// Status code returned by the radio layer. Zero means success; any other
/// value is propagated to the caller verbatim.
#[derive(Debug, Display, From, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadioStatus(i32);

impl RadioStatus {
    pub const SUCCESS: Self = Self(0);

    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    pub fn code(&self) -> i32 {
        self.0
    }

    pub fn is_success(&self) -> bool {
        self.0 == 0
    }
}

/// NFCID1 (7 バイト) presented during anticollision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uid([u8; UID_LEN]);

impl Uid {
    pub fn from_bytes(bytes: [u8; UID_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; UID_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }

    /// BCC0 = CT ^ uid0 ^ uid1 ^ uid2
    pub fn bcc0(&self) -> u8 {
        crate::protocol::checksum::bcc0(&self.0)
    }

    /// BCC1 = uid3 ^ uid4 ^ uid5 ^ uid6
    pub fn bcc1(&self) -> u8 {
        crate::protocol::checksum::bcc1(&self.0)
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != UID_LEN {
            return Err(Error::InvalidLength {
                expected: UID_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; UID_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Event delivered by the radio layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    FieldOn,
    FieldOff,
    DataReceived(Vec<u8>),
    DataTransmitted,
    /// Any event kind the engine does not interpret (raw HAL event id)
    Other(u32),
}

/// Field lifecycle state.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldState {
    #[default]
    Idle,
    FieldPresent,
}
