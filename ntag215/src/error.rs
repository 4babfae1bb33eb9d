// ntag215/src/error.rs

use thiserror::Error;

use crate::types::RadioStatus;

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("not configured: no {0} set")]
    NotConfigured(&'static str),

    #[error("session is active; stop the emulator first")]
    SessionActive,

    #[error("buffer too small: expected at least {expected} bytes, got {actual}")]
    BufferTooSmall { expected: usize, actual: usize },

    #[error("invalid buffer: {0}")]
    InvalidBuffer(String),

    // Frame-level errors. The dispatcher turns these into nak/empty
    // responses; they never reach the emulator's caller.
    #[error("empty frame")]
    EmptyFrame,

    #[error("invalid frame length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid address range {start}:{end}")]
    InvalidAddress { start: u8, end: u8 },

    #[error("access out of bounds: index {index}, length {len}")]
    OutOfBounds { index: usize, len: usize },

    #[error("radio error: status={0}")]
    Radio(RadioStatus),
}

pub type Result<T> = std::result::Result<T, Error>;
