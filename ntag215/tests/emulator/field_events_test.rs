use ntag215::{EmulatorBuilder, FieldEvent, FieldNotice, FieldState, MockRadio};
use ntag215::radio::RecordingObserver;

use crate::common::{self, fixtures};

#[test]
fn observer_sees_field_cycle_and_flags_reset() {
    common::init_logger();
    let observer = RecordingObserver::new();
    let mut emu = EmulatorBuilder::new()
        .with_radio(MockRadio::new())
        .with_observer(observer.clone())
        .with_tag(fixtures::sample_memory())
        .with_identity_buffer(vec![0u8; 32])
        .build()
        .expect("builder");
    emu.start().expect("start");

    emu.drain([
        FieldEvent::FieldOn,
        FieldEvent::DataReceived(vec![0x1B, 0xFF, 0xFF, 0xFF, 0xFF]),
        FieldEvent::DataTransmitted,
        FieldEvent::DataReceived(fixtures::write_frame(0x10, [1, 1, 1, 1])),
    ]);
    assert_eq!(emu.session().field(), FieldState::FieldPresent);
    assert!(emu.session().is_authenticated());
    assert!(emu.is_modified());

    emu.handle_event(FieldEvent::FieldOff);
    assert_eq!(emu.session().field(), FieldState::Idle);
    assert!(!emu.session().is_authenticated());
    assert!(emu.is_modified());
    assert_eq!(
        observer.notices(),
        vec![FieldNotice::Activated, FieldNotice::Deactivated]
    );
}

#[test]
fn unknown_events_are_ignored() {
    let mut emu = common::started();
    emu.handle_event(FieldEvent::Other(99));
    emu.handle_event(FieldEvent::DataTransmitted);
    assert!(emu.radio().transmissions.is_empty());
    assert_eq!(emu.session().field(), FieldState::Idle);
}
