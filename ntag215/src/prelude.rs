// ntag215/src/prelude.rs

pub use crate::config::EmulatorConfig;
pub use crate::emulator::{Emulator, EmulatorBuilder, SessionState};
pub use crate::memory::{IdentityBuffer, IdentityLayout, TagMemory};
pub use crate::protocol::{Command, Reply};
pub use crate::radio::{FieldNotice, FieldObserver, MockRadio, Radio, Transmission};
pub use crate::{Error, FieldEvent, FieldState, PageIndex, RadioStatus, Result, Uid};

pub use crate::utils::{HexBytes, bytes_to_hex, bytes_to_hex_spaced, parse_hex};
