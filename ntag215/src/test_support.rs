//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize the sample tag dump and emulator setup so tests
//! across the crate and tests/ directory share the same fixtures.
#![allow(dead_code)]

use crate::constants::TAG_MEMORY_MIN_LEN;
use crate::emulator::Emulator;
use crate::protocol::checksum::{bcc0, bcc1};
use crate::radio::Radio;
use crate::Result;

/// UID used by the sample dump.
pub const SAMPLE_UID: [u8; 7] = [0x04, 0x51, 0x62, 0x73, 0x84, 0x95, 0xA6];

/// A 572-byte dump with a consistent UID, a type 2 capability container,
/// no locks set and a recognisable signature (0x50, 0x51, ..).
#[doc(hidden)]
pub fn sample_tag_bytes() -> Vec<u8> {
    let mut bytes = vec![0u8; TAG_MEMORY_MIN_LEN];
    let uid = SAMPLE_UID;
    bytes[0..3].copy_from_slice(&uid[..3]);
    bytes[3] = bcc0(&uid);
    bytes[4..8].copy_from_slice(&uid[3..]);
    bytes[8] = bcc1(&uid);
    bytes[9] = 0x48;
    bytes[12..16].copy_from_slice(&[0xE1, 0x10, 0x3E, 0x00]);
    // user area filled with the page number for easy assertions
    for page in 4..130usize {
        bytes[page * 4..page * 4 + 4].fill(page as u8);
    }
    for (i, b) in bytes[540..572].iter_mut().enumerate() {
        *b = 0x50u8.wrapping_add(i as u8);
    }
    bytes
}

/// Emulator with the sample dump and a default identity buffer bound,
/// already started.
#[doc(hidden)]
pub fn started_emulator<R: Radio>(radio: R) -> Result<Emulator<R>> {
    let mut emu = Emulator::new(radio);
    emu.bind_tag_memory(sample_tag_bytes())?;
    emu.bind_identity_buffer(vec![0u8; 32])?;
    emu.start()?;
    Ok(emu)
}
