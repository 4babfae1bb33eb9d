use ntag215::{FieldEvent, Transmission};

use crate::common::{self, fixtures};

const ACK: Transmission = Transmission::AckNak {
    value: 0x0A,
    bits: 4,
};
const NAK: Transmission = Transmission::AckNak {
    value: 0x00,
    bits: 4,
};

#[test]
fn unlock_payload_and_uid_rewrite() {
    let mut emu = common::started();
    emu.handle_event(FieldEvent::FieldOn);

    emu.handle_event(FieldEvent::DataReceived(fixtures::write_frame(
        0,
        [0x04, 0x00, 0x00, 0x00],
    )));
    assert_eq!(emu.radio().last(), Some(&NAK));

    emu.handle_event(FieldEvent::DataReceived(fixtures::fast_read_frame(133, 134)));
    assert_eq!(
        emu.radio().last(),
        Some(&Transmission::Data(vec![1, 2, 3, 4, 5, 6, 7, 8]))
    );
    assert!(emu.session().is_backdoor());

    emu.handle_event(FieldEvent::DataReceived(fixtures::write_frame(
        0,
        [0x04, 0x00, 0x00, 0x00],
    )));
    assert_eq!(emu.radio().last(), Some(&ACK));
    assert_eq!(&emu.tag_memory().unwrap().as_bytes()[..4], &[0x04, 0, 0, 0]);
}

#[test]
fn backdoor_ends_with_the_field() {
    let mut emu = common::started();
    emu.drain([
        FieldEvent::FieldOn,
        FieldEvent::DataReceived(fixtures::fast_read_frame(133, 134)),
        FieldEvent::FieldOff,
        FieldEvent::FieldOn,
        FieldEvent::DataReceived(fixtures::write_frame(1, [9, 9, 9, 9])),
    ]);
    assert!(!emu.session().is_backdoor());
    assert_eq!(emu.radio().last(), Some(&NAK));
}

#[test]
fn upper_write_bound_depends_on_backdoor() {
    let mut emu = common::started();
    // page 135 (index 540) is outside the user area
    emu.handle_event(FieldEvent::DataReceived(fixtures::write_frame(135, [7; 4])));
    assert_eq!(emu.radio().last(), Some(&NAK));

    emu.handle_event(FieldEvent::DataReceived(fixtures::fast_read_frame(133, 134)));
    for page in [135u8, 140, 142] {
        emu.handle_event(FieldEvent::DataReceived(fixtures::write_frame(page, [7; 4])));
        assert_eq!(emu.radio().last(), Some(&ACK), "page {page}");
    }
    emu.handle_event(FieldEvent::DataReceived(fixtures::write_frame(143, [7; 4])));
    assert_eq!(emu.radio().last(), Some(&NAK));
    assert_eq!(&emu.tag_memory().unwrap().as_bytes()[568..572], &[7; 4]);
}
