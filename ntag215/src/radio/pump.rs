// ntag215/src/radio/pump.rs
//! Single-consumer event loop for radios that deliver field events
//! through a queue instead of an interrupt callback.

use async_trait::async_trait;
use log::debug;
use tokio::sync::mpsc;

use crate::emulator::Emulator;
use crate::radio::Radio;
use crate::types::FieldEvent;

/// Source of field events. `None` means the radio side went away.
#[async_trait]
pub trait EventSource {
    async fn next_event(&mut self) -> Option<FieldEvent>;
}

#[async_trait]
impl EventSource for mpsc::Receiver<FieldEvent> {
    async fn next_event(&mut self) -> Option<FieldEvent> {
        self.recv().await
    }
}

#[async_trait]
impl EventSource for mpsc::UnboundedReceiver<FieldEvent> {
    async fn next_event(&mut self) -> Option<FieldEvent> {
        self.recv().await
    }
}

/// Feed every event from `source` into `emulator`, one at a time, until the
/// source closes. Each frame is answered before the next event is pulled.
/// Returns the number of events handled.
pub async fn run_event_loop<R, S>(emulator: &mut Emulator<R>, source: &mut S) -> usize
where
    R: Radio,
    S: EventSource + Send + ?Sized,
{
    let mut handled = 0usize;
    while let Some(event) = source.next_event().await {
        emulator.handle_event(event);
        handled += 1;
    }
    debug!("event source closed after {} events", handled);
    handled
}
