// ntag215/src/constants.rs
//! Tag layout, opcode and fixed-payload constants used across the crate

/// API version as a 24-bit number: major << 16 | minor << 8 | patch
pub const API_VERSION: u32 = (1 << 16) + (0 << 8) + 0;

/// Bytes per addressable page
pub const PAGE_SIZE: usize = 4;

/// Minimum tag memory length accepted at bind time
pub const TAG_MEMORY_MIN_LEN: usize = 572;

/// Minimum identity buffer length (7-byte UID + 25-byte scratch area)
pub const IDENTITY_BUFFER_MIN_LEN: usize = 32;

/// NFCID / UID length in bytes
pub const UID_LEN: usize = 7;

/// Scratch area length that follows the UID in the default identity layout
pub const SCRATCH_LEN: usize = IDENTITY_BUFFER_MIN_LEN - UID_LEN;

/// Byte offsets of the two UID check bytes
pub const BCC0_OFFSET: usize = 3;
pub const BCC1_OFFSET: usize = 8;

/// Cascade tag folded into BCC0
pub const CASCADE_TAG: u8 = 0x88;

/// Static lock bytes (low, high)
pub const STATIC_LOCK_LOW_OFFSET: usize = 10;
pub const STATIC_LOCK_HIGH_OFFSET: usize = 11;

/// Capability container, merge-written by page 3 writes
pub const CONFIG_REGION_OFFSET: usize = 16;

/// Per-block dynamic protection bitmask
pub const DYNAMIC_PROTECTION_OFFSET: usize = 520;

/// Signature region
pub const SIGNATURE_OFFSET: usize = 540;
pub const SIGNATURE_LEN: usize = 32;

/// Number of bytes returned by a single Read (0x30)
pub const READ_LEN: usize = 16;

/// Highest page a reader may address outside backdoor mode
pub const MAX_USER_PAGE: u8 = 134;

/// Highest byte index written through the generic path outside backdoor mode
pub const MAX_WRITE_INDEX: usize = 536;

/// Highest byte index written through the generic path in backdoor mode (page 142)
pub const MAX_BACKDOOR_WRITE_INDEX: usize = 568;

/// Fast Read address pair that switches the tag into backdoor mode
pub const BACKDOOR_START_PAGE: u8 = 133;
pub const BACKDOOR_END_PAGE: u8 = 134;

/// Page holding the dynamic lock bytes (not interpreted)
pub const DYNAMIC_LOCK_PAGE: u8 = 130;

/// Reader opcodes
pub const CMD_READ: u8 = 0x30;
pub const CMD_WRITE: u8 = 0xA2;
pub const CMD_GET_VERSION: u8 = 0x60;
pub const CMD_FAST_READ: u8 = 0x3A;
pub const CMD_PWD_AUTH: u8 = 0x1B;
pub const CMD_READ_SIG: u8 = 0x3C;
pub const CMD_VENDOR_RESTART: u8 = 0x88;

/// 4-bit ACK value
pub const ACK: u8 = 0x0A;
/// 4-bit NAK value
pub const NAK: u8 = 0x00;
/// Bit length of ACK/NAK responses
pub const ACK_NAK_BITS: u8 = 4;

/// GET_VERSION response for NTAG215
pub const VERSION_DESCRIPTOR: [u8; 8] = [0x00, 0x04, 0x04, 0x02, 0x01, 0x00, 0x11, 0x03];

/// PWD_AUTH response (PACK)
pub const PASSWORD_ACK: [u8; 2] = [0x80, 0x80];

/// Fast Read response acknowledging backdoor entry
pub const BACKDOOR_UNLOCK_ACK: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
