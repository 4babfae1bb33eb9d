// ntag215/src/lib.rs

//! ntag215
//!
//! NTAG215 tag emulation engine. Holds the tag's page memory, evaluates
//! static and dynamic lock bits, repairs UID check bytes, and answers
//! reader commands (READ, WRITE, GET_VERSION, FAST_READ, PWD_AUTH,
//! READ_SIG and a vendor restart) through a pluggable `Radio` front end.
#![warn(missing_docs)]

pub mod config;
pub mod constants;
pub mod emulator;
pub mod error;
pub mod memory;
pub mod prelude;
pub mod protocol;
pub mod radio;
pub mod test_support;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use constants::API_VERSION;
pub use prelude::*;
