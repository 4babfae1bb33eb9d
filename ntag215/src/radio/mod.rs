// ntag215/src/radio/mod.rs

pub mod mock;
pub mod observer;
#[cfg(feature = "async")]
pub mod pump;
pub mod traits;

pub use mock::{MockRadio, Transmission};
pub use observer::{FieldNotice, FieldObserver, NoopObserver, RecordingObserver};
#[cfg(feature = "async")]
pub use pump::{EventSource, run_event_loop};
pub use traits::Radio;
