use anyhow::Result;
use ntag215::{Emulator, Error, FieldEvent, MockRadio, RadioStatus, Transmission};

use crate::common::{self, fixtures};

#[test]
fn start_needs_identity_buffer_then_answers_get_version() -> Result<()> {
    common::init_logger();
    let mut emu = Emulator::new(MockRadio::new());
    emu.bind_tag_memory(vec![0u8; 572])?;
    assert_eq!(emu.start(), Err(Error::NotConfigured("identity buffer")));

    emu.bind_identity_buffer(vec![0xFFu8; 32])?;
    assert_eq!(emu.start()?, RadioStatus::SUCCESS);
    assert_eq!(emu.identity().unwrap().uid_bytes(), &[0u8; 7]);

    emu.handle_event(FieldEvent::FieldOn);
    emu.handle_event(FieldEvent::DataReceived(vec![0x60]));
    assert_eq!(
        emu.radio().last(),
        Some(&Transmission::Data(vec![
            0x00, 0x04, 0x04, 0x02, 0x01, 0x00, 0x11, 0x03
        ]))
    );
    Ok(())
}

#[test]
fn nfcid_comes_from_uid_pages() -> Result<()> {
    common::init_logger();
    let mut emu = Emulator::new(MockRadio::new());
    emu.bind_tag(fixtures::sample_memory())?;
    emu.bind_identity_buffer(vec![0u8; 32])?;
    emu.start()?;

    assert_eq!(emu.identity().unwrap().uid_bytes(), &fixtures::sample_uid());
    assert_eq!(emu.radio().identities, vec![fixtures::sample_uid().to_vec()]);
    // scratch area is left alone
    assert!(emu.identity().unwrap().scratch().iter().all(|b| *b == 0));
    Ok(())
}

#[test]
fn host_reads_memory_back_after_stop() -> Result<()> {
    let mut emu = common::started();
    emu.handle_event(FieldEvent::DataReceived(fixtures::write_frame(
        0x20,
        [1, 2, 3, 4],
    )));
    assert!(emu.is_modified());
    assert_eq!(emu.unbind_tag_memory(), Err(Error::SessionActive));

    emu.stop();
    let memory = emu.unbind_tag_memory()?.expect("memory bound");
    assert_eq!(&memory.as_bytes()[0x80..0x84], &[1, 2, 3, 4]);
    assert!(emu.tag_memory().is_none());
    assert_eq!(emu.start(), Err(Error::NotConfigured("tag memory")));
    Ok(())
}

#[test]
fn restart_returns_start_status() -> Result<()> {
    let mut emu = common::started();
    emu.radio_mut().start_status = RadioStatus::new(4);
    assert_eq!(emu.restart()?, RadioStatus::new(4));
    Ok(())
}
