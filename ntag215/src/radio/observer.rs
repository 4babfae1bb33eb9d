// ntag215/src/radio/observer.rs

use std::sync::{Arc, Mutex};

/// Field lifecycle notification handed to the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldNotice {
    Activated,
    Deactivated,
}

/// Receives field lifecycle notifications. Called from the event path, so
/// implementations must return quickly and must not block.
pub trait FieldObserver: Send {
    fn field_activated(&mut self) {}
    fn field_deactivated(&mut self) {}
}

/// Discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl FieldObserver for NoopObserver {}

/// Collects notifications into a shared log. Clones share the same log, so
/// a test can keep one handle and give the other to the emulator.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    notices: Arc<Mutex<Vec<FieldNotice>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<FieldNotice> {
        match self.notices.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn push(&self, notice: FieldNotice) {
        match self.notices.lock() {
            Ok(mut guard) => guard.push(notice),
            Err(poisoned) => poisoned.into_inner().push(notice),
        }
    }
}

impl FieldObserver for RecordingObserver {
    fn field_activated(&mut self) {
        self.push(FieldNotice::Activated);
    }

    fn field_deactivated(&mut self) {
        self.push(FieldNotice::Deactivated);
    }
}

#[cfg(feature = "async")]
impl FieldObserver for tokio::sync::mpsc::UnboundedSender<FieldNotice> {
    fn field_activated(&mut self) {
        if self.send(FieldNotice::Activated).is_err() {
            log::warn!("field observer channel closed");
        }
    }

    fn field_deactivated(&mut self) {
        if self.send(FieldNotice::Deactivated).is_err() {
            log::warn!("field observer channel closed");
        }
    }
}
