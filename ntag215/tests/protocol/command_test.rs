use ntag215::{Command, Error, PageIndex};

#[test]
fn decode_reader_frames() {
    assert_eq!(
        Command::decode(&[0x30, 0x10]).unwrap(),
        Command::Read {
            page: PageIndex::new(0x10)
        }
    );
    assert_eq!(Command::decode(&[0x60]).unwrap(), Command::GetVersion);
    assert_eq!(Command::decode(&[0x3C, 0x00]).unwrap(), Command::ReadSignature);
    assert_eq!(Command::decode(&[0x88]).unwrap(), Command::VendorRestart);
    assert_eq!(Command::decode(&[]), Err(Error::EmptyFrame));
}

#[test]
fn encoded_write_decodes_back() {
    let cmd = Command::Write {
        page: PageIndex::new(0x20),
        data: [0xDE, 0xAD, 0xBE, 0xEF],
    };
    let frame = cmd.encode();
    assert_eq!(frame, vec![0xA2, 0x20, 0xDE, 0xAD, 0xBE, 0xEF]);
    assert_eq!(Command::decode(&frame).unwrap(), cmd);
}
