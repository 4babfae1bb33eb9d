// ntag215/src/protocol/responses.rs

use crate::Result;
use crate::constants::{ACK, ACK_NAK_BITS, NAK};
use crate::radio::Radio;

/// What the tag answers to one reader frame. `Data` borrows straight from
/// tag memory or the configured payloads, so answering never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply<'a> {
    Data(&'a [u8]),
    /// 4-bit ACK (0xA)
    Ack,
    /// 4-bit NAK (0x0)
    Nak,
    /// Zero-length response
    Empty,
}

impl Reply<'_> {
    /// Emit this reply through the radio. Exactly one radio call per reply.
    pub fn emit<R: Radio + ?Sized>(&self, radio: &mut R) -> Result<()> {
        match self {
            Reply::Data(bytes) => radio.send(bytes),
            Reply::Ack => radio.send_ack_nak(ACK, ACK_NAK_BITS),
            Reply::Nak => radio.send_ack_nak(NAK, ACK_NAK_BITS),
            Reply::Empty => radio.send_ack_nak(0, 0),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Reply::Data(bytes) => bytes.len(),
            Reply::Ack | Reply::Nak => 1,
            Reply::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
