// ntag215/src/radio/mock.rs

use crate::radio::traits::Radio;
use crate::types::RadioStatus;
use crate::{Error, Result};

/// One response emitted by the emulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transmission {
    Data(Vec<u8>),
    AckNak { value: u8, bits: u8 },
}

/// Mock radio for unit tests. It records every call and returns scripted
/// status codes.
#[derive(Debug, Default)]
pub struct MockRadio {
    pub transmissions: Vec<Transmission>,
    /// Every NFCID passed to `set_identity_parameter`, oldest first
    pub identities: Vec<Vec<u8>>,
    pub setups: usize,
    pub starts: usize,
    pub stops: usize,
    pub teardowns: usize,
    /// Whether the radio is currently started
    pub running: bool,
    /// Status returned by `start`
    pub start_status: RadioStatus,
    /// Status returned by `set_identity_parameter`
    pub identity_status: RadioStatus,
    /// Testing hook: number of send calls that should fail
    pub send_failures: usize,
}

impl MockRadio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the status `start` returns.
    pub fn with_start_status(mut self, status: RadioStatus) -> Self {
        self.start_status = status;
        self
    }

    /// Set how many subsequent send calls should fail (for tests).
    pub fn set_send_failures(&mut self, n: usize) {
        self.send_failures = n;
    }

    pub fn last(&self) -> Option<&Transmission> {
        self.transmissions.last()
    }

    /// Drain and return everything transmitted so far.
    pub fn take_transmissions(&mut self) -> Vec<Transmission> {
        std::mem::take(&mut self.transmissions)
    }

    fn record(&mut self, t: Transmission) -> Result<()> {
        if self.send_failures > 0 {
            self.send_failures -= 1;
            return Err(Error::Radio(RadioStatus::new(-1)));
        }
        self.transmissions.push(t);
        Ok(())
    }
}

impl Radio for MockRadio {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.record(Transmission::Data(data.to_vec()))
    }

    fn send_ack_nak(&mut self, value: u8, bits: u8) -> Result<()> {
        self.record(Transmission::AckNak { value, bits })
    }

    fn set_identity_parameter(&mut self, nfcid: &[u8]) -> RadioStatus {
        self.identities.push(nfcid.to_vec());
        self.identity_status
    }

    fn setup(&mut self) -> RadioStatus {
        self.setups += 1;
        RadioStatus::SUCCESS
    }

    fn start(&mut self) -> RadioStatus {
        self.starts += 1;
        self.running = true;
        self.start_status
    }

    fn stop(&mut self) {
        self.stops += 1;
        self.running = false;
    }

    fn teardown(&mut self) {
        self.teardowns += 1;
    }
}
