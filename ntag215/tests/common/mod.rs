// Shared helpers for the integration test crates.
#![allow(dead_code)]


use ntag215::{Emulator, MockRadio};

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Started emulator over the crate's sample dump and a fresh mock radio,
/// with nothing transmitted yet.
pub fn started() -> Emulator<MockRadio> {
    init_logger();
    let mut emu = ntag215::test_support::started_emulator(MockRadio::new())
        .expect("sample emulator starts");
    emu.radio_mut().take_transmissions();
    emu
}
