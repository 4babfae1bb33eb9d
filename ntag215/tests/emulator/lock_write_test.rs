use ntag215::{FieldEvent, Transmission};

use crate::common::{self, fixtures};

#[test]
fn lock_bytes_merge_instead_of_overwrite() {
    let mut emu = common::started();
    emu.drain([
        FieldEvent::DataReceived(fixtures::write_frame(2, [0, 0, 0x0F, 0x00])),
        FieldEvent::DataReceived(fixtures::write_frame(2, [0, 0, 0xF0, 0x00])),
    ]);
    assert_eq!(emu.tag_memory().unwrap().static_lock(), (0xFF, 0x00));

    // low bits 4-7 now lock pages 8-11
    emu.handle_event(FieldEvent::DataReceived(fixtures::write_frame(9, [1; 4])));
    assert_eq!(
        emu.radio().last(),
        Some(&Transmission::AckNak {
            value: 0x00,
            bits: 4
        })
    );
    emu.handle_event(FieldEvent::DataReceived(fixtures::write_frame(12, [1; 4])));
    assert_eq!(
        emu.radio().last(),
        Some(&Transmission::AckNak {
            value: 0x0A,
            bits: 4
        })
    );
}

#[test]
fn dynamic_protection_written_then_enforced() {
    let mut emu = common::started();
    // page 130 is stored as-is; its first byte is the protection mask
    emu.handle_event(FieldEvent::DataReceived(fixtures::write_frame(
        130,
        [0b0000_0001, 0, 0, 0],
    )));
    emu.handle_event(FieldEvent::DataReceived(fixtures::write_frame(20, [5; 4])));
    assert_eq!(
        emu.radio().last(),
        Some(&Transmission::AckNak {
            value: 0x00,
            bits: 4
        })
    );

    emu.handle_event(FieldEvent::DataReceived(vec![0x1B, 0, 0, 0, 0]));
    emu.handle_event(FieldEvent::DataReceived(fixtures::write_frame(20, [5; 4])));
    assert_eq!(
        emu.radio().last(),
        Some(&Transmission::AckNak {
            value: 0x0A,
            bits: 4
        })
    );
}

#[test]
fn fast_read_returns_written_pages() {
    let mut emu = common::started();
    emu.handle_event(FieldEvent::DataReceived(fixtures::write_frame(
        0x30,
        [0xAA, 0xBB, 0xCC, 0xDD],
    )));
    emu.handle_event(FieldEvent::DataReceived(fixtures::fast_read_frame(0x30, 0x31)));
    match emu.radio().last() {
        Some(Transmission::Data(bytes)) => {
            assert_eq!(bytes.len(), 8);
            assert_eq!(&bytes[..4], &[0xAA, 0xBB, 0xCC, 0xDD]);
        }
        other => panic!("expected data, got {:?}", other),
    }
}
