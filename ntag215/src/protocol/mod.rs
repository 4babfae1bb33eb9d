// ntag215/src/protocol/mod.rs

pub mod checksum;
pub mod commands;
pub mod dispatch;
pub mod lock;
pub mod responses;

pub use checksum::{bcc0, bcc1, fix_uid};
pub use commands::Command;
pub use dispatch::{Action, Dispatch, dispatch};
pub use lock::is_locked;
pub use responses::Reply;
