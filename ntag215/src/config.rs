// ntag215/src/config.rs
//! Emulator configuration: fixed reader-visible payloads and buffer layout.

use crate::constants::{BACKDOOR_UNLOCK_ACK, PASSWORD_ACK, VERSION_DESCRIPTOR};
use crate::memory::IdentityLayout;

/// Tunables for an `Emulator`. The defaults reproduce an NTAG215.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EmulatorConfig {
    /// GET_VERSION response
    pub version: [u8; 8],
    /// PWD_AUTH response (PACK)
    pub password_ack: [u8; 2],
    /// Fast Read response when the backdoor address pair is requested
    pub unlock_ack: [u8; 8],
    /// Where the NFCID and scratch area live inside the identity buffer
    pub identity_layout: IdentityLayout,
    /// Nak a READ whose 16 bytes would run past the end of tag memory.
    /// When unset the reply is truncated at the end of the buffer instead.
    pub strict_read_bounds: bool,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            version: VERSION_DESCRIPTOR,
            password_ack: PASSWORD_ACK,
            unlock_ack: BACKDOOR_UNLOCK_ACK,
            identity_layout: IdentityLayout::default(),
            strict_read_bounds: true,
        }
    }
}
