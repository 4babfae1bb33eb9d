use ntag215::radio::{MockRadio, Radio, Transmission};
use ntag215::{Error, RadioStatus};

#[test]
fn mock_radio_records_and_fails_on_demand() {
    let mut radio = MockRadio::new();
    radio.send(&[0x01, 0x02]).unwrap();
    radio.set_send_failures(1);
    assert!(matches!(radio.send_ack_nak(0x0A, 4), Err(Error::Radio(_))));
    radio.send_ack_nak(0x0A, 4).unwrap();

    assert_eq!(
        radio.take_transmissions(),
        vec![
            Transmission::Data(vec![0x01, 0x02]),
            Transmission::AckNak {
                value: 0x0A,
                bits: 4
            },
        ]
    );
}

#[test]
fn boxed_radio_keeps_statuses() {
    let mut radio: Box<dyn Radio> =
        Box::new(MockRadio::new().with_start_status(RadioStatus::new(3)));
    assert_eq!(radio.set_identity_parameter(&[1, 2, 3, 4, 5, 6, 7]), RadioStatus::SUCCESS);
    assert_eq!(radio.start(), RadioStatus::new(3));
    radio.stop();
}
