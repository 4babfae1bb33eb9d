// ntag215/src/protocol/commands.rs

use crate::constants::{
    CMD_FAST_READ, CMD_GET_VERSION, CMD_PWD_AUTH, CMD_READ, CMD_READ_SIG, CMD_VENDOR_RESTART,
    CMD_WRITE, MAX_USER_PAGE, PAGE_SIZE,
};
use crate::types::PageIndex;
use crate::{Error, Result};

/// Reader request decoded once at the boundary. New opcodes should be
/// added here and handled in `protocol::dispatch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// READ: 16 bytes starting at `page`
    Read { page: PageIndex },
    /// WRITE: one page
    Write {
        page: PageIndex,
        data: [u8; PAGE_SIZE],
    },
    GetVersion,
    /// FAST_READ: pages `start..=end`
    FastRead { start: PageIndex, end: PageIndex },
    /// PWD_AUTH. The password is carried for logging only; any value succeeds.
    PasswordAuth { password: Option<[u8; 4]> },
    ReadSignature,
    /// Vendor extension: acknowledge and restart the radio session
    VendorRestart,
    Unknown(u8),
}

impl Command {
    /// Decode a raw frame. Errors describe why the frame was rejected; the
    /// dispatcher maps them to the wire response the reader expects.
    pub fn decode(frame: &[u8]) -> Result<Self> {
        let (&opcode, args) = frame.split_first().ok_or(Error::EmptyFrame)?;

        match opcode {
            CMD_READ => {
                ensure_len(frame, 2)?;
                Ok(Self::Read {
                    page: PageIndex::new(args[0]),
                })
            }
            CMD_WRITE => {
                ensure_len(frame, 2 + PAGE_SIZE)?;
                let mut data = [0u8; PAGE_SIZE];
                data.copy_from_slice(&args[1..1 + PAGE_SIZE]);
                Ok(Self::Write {
                    page: PageIndex::new(args[0]),
                    data,
                })
            }
            CMD_GET_VERSION => Ok(Self::GetVersion),
            CMD_FAST_READ => {
                ensure_len(frame, 3)?;
                let (start, end) = (args[0], args[1]);
                if start > end || end > MAX_USER_PAGE {
                    return Err(Error::InvalidAddress { start, end });
                }
                Ok(Self::FastRead {
                    start: PageIndex::new(start),
                    end: PageIndex::new(end),
                })
            }
            CMD_PWD_AUTH => {
                let password = args.get(..4).map(|p| [p[0], p[1], p[2], p[3]]);
                Ok(Self::PasswordAuth { password })
            }
            CMD_READ_SIG => Ok(Self::ReadSignature),
            CMD_VENDOR_RESTART => Ok(Self::VendorRestart),
            other => Ok(Self::Unknown(other)),
        }
    }

    /// Opcode byte of this command.
    pub fn opcode(&self) -> u8 {
        match self {
            Self::Read { .. } => CMD_READ,
            Self::Write { .. } => CMD_WRITE,
            Self::GetVersion => CMD_GET_VERSION,
            Self::FastRead { .. } => CMD_FAST_READ,
            Self::PasswordAuth { .. } => CMD_PWD_AUTH,
            Self::ReadSignature => CMD_READ_SIG,
            Self::VendorRestart => CMD_VENDOR_RESTART,
            Self::Unknown(op) => *op,
        }
    }

    /// Encode as a reader would send it. Handy for driving the emulator
    /// from tests and host tools.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = vec![self.opcode()];
        match self {
            Self::Read { page } => buf.push(page.as_u8()),
            Self::Write { page, data } => {
                buf.push(page.as_u8());
                buf.extend_from_slice(data);
            }
            Self::FastRead { start, end } => {
                buf.push(start.as_u8());
                buf.push(end.as_u8());
            }
            Self::PasswordAuth {
                password: Some(pwd),
            } => buf.extend_from_slice(pwd),
            Self::PasswordAuth { password: None }
            | Self::GetVersion
            | Self::ReadSignature
            | Self::VendorRestart
            | Self::Unknown(_) => {}
        }
        buf
    }
}

fn ensure_len(frame: &[u8], min: usize) -> Result<()> {
    if frame.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: frame.len(),
        });
    }
    Ok(())
}
