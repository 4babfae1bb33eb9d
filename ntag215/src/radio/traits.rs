// ntag215/src/radio/traits.rs

use crate::Result;
use crate::types::RadioStatus;

/// Radio trait abstracts the NFC front end away from the tag logic.
///
/// Calls are synchronous from the emulator's point of view. Field events
/// flow the other way: whoever owns the radio feeds them into
/// `Emulator::handle_event`.
pub trait Radio {
    /// Transmit a full response frame
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Transmit a short (ACK/NAK) response of `bits` bits
    fn send_ack_nak(&mut self, value: u8, bits: u8) -> Result<()>;

    /// Configure the NFCID1 presented during anticollision
    fn set_identity_parameter(&mut self, nfcid: &[u8]) -> RadioStatus;

    /// Register the emulator as the event consumer. Radios that deliver
    /// events through a queue need no registration, so the default is a
    /// successful no-op.
    fn setup(&mut self) -> RadioStatus {
        RadioStatus::SUCCESS
    }

    /// Start emulating (field detection on)
    fn start(&mut self) -> RadioStatus;

    /// Stop emulating
    fn stop(&mut self);

    /// Release resources acquired by `setup`. Default does nothing.
    fn teardown(&mut self) {}
}

impl<R: Radio + ?Sized> Radio for Box<R> {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        (**self).send(data)
    }

    fn send_ack_nak(&mut self, value: u8, bits: u8) -> Result<()> {
        (**self).send_ack_nak(value, bits)
    }

    fn set_identity_parameter(&mut self, nfcid: &[u8]) -> RadioStatus {
        (**self).set_identity_parameter(nfcid)
    }

    fn setup(&mut self) -> RadioStatus {
        (**self).setup()
    }

    fn start(&mut self) -> RadioStatus {
        (**self).start()
    }

    fn stop(&mut self) {
        (**self).stop()
    }

    fn teardown(&mut self) {
        (**self).teardown()
    }
}
