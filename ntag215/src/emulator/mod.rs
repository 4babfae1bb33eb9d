// ntag215/src/emulator/mod.rs

pub mod builder;
pub mod handle;
pub mod session;

pub use builder::EmulatorBuilder;
pub use handle::Emulator;
#[cfg(feature = "diagnostics")]
pub use session::DispatchStats;
pub use session::SessionState;
