use ntag215::emulator::SessionState;
use ntag215::protocol::{Reply, dispatch};
use ntag215::EmulatorConfig;
use proptest::prelude::*;

use crate::common::fixtures;

proptest! {
    // Arbitrary reader frames must never panic and must always produce a
    // reply that fits the bound memory.
    #[test]
    fn arbitrary_frames_never_panic(frame in prop::collection::vec(any::<u8>(), 0..24)) {
        let mut memory = fixtures::sample_memory();
        let mut session = SessionState::default();
        let config = EmulatorConfig::default();

        let out = dispatch(&frame, &mut session, &mut memory, &config);
        if let Reply::Data(bytes) = out.reply {
            prop_assert!(bytes.len() <= 572);
        }
    }

    #[test]
    fn writes_outside_user_area_nak_without_backdoor(page in 135u8.., data in any::<[u8; 4]>()) {
        let mut memory = fixtures::sample_memory();
        let mut session = SessionState::default();
        let config = EmulatorConfig::default();

        let frame = fixtures::write_frame(page, data);
        let out = dispatch(&frame, &mut session, &mut memory, &config);
        prop_assert_eq!(out.reply, Reply::Nak);
        prop_assert!(!session.is_tag_modified());
    }
}
