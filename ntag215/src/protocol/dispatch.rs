// ntag215/src/protocol/dispatch.rs

use log::{debug, trace, warn};

use crate::config::EmulatorConfig;
use crate::constants::{
    BACKDOOR_END_PAGE, BACKDOOR_START_PAGE, CMD_READ, CONFIG_REGION_OFFSET, DYNAMIC_LOCK_PAGE,
    MAX_BACKDOOR_WRITE_INDEX, MAX_USER_PAGE, MAX_WRITE_INDEX, PAGE_SIZE, READ_LEN,
    STATIC_LOCK_LOW_OFFSET,
};
use crate::emulator::SessionState;
use crate::memory::TagMemory;
use crate::protocol::commands::Command;
use crate::protocol::lock::is_locked;
use crate::protocol::responses::Reply;
use crate::types::PageIndex;
use crate::Error;

/// Follow-up work the caller must perform after the reply went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Restart,
}

/// Outcome of dispatching one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch<'a> {
    pub reply: Reply<'a>,
    pub action: Action,
}

impl<'a> Dispatch<'a> {
    fn reply(reply: Reply<'a>) -> Self {
        Self {
            reply,
            action: Action::None,
        }
    }
}

/// Decode `frame`, apply it to `memory` and `session`, and produce the
/// single reply the reader gets. Malformed frames never fail: they map to
/// the nak or empty response the tag would send.
pub fn dispatch<'a>(
    frame: &[u8],
    session: &mut SessionState,
    memory: &'a mut TagMemory,
    config: &'a EmulatorConfig,
) -> Dispatch<'a> {
    let command = match Command::decode(frame) {
        Ok(command) => command,
        Err(err) => return Dispatch::reply(reply_for_rejected(frame, &err)),
    };

    let reply = match command {
        Command::Read { page } => read(page, memory, config),
        Command::Write { page, data } => write(page, &data, session, memory),
        Command::GetVersion => Reply::Data(&config.version),
        Command::FastRead { start, end } => fast_read(start, end, session, memory, config),
        Command::PasswordAuth { password } => {
            trace!("PWD_AUTH accepted (password {:02x?})", password);
            session.authenticated = true;
            Reply::Data(&config.password_ack)
        }
        Command::ReadSignature => Reply::Data(memory.signature()),
        Command::VendorRestart => {
            debug!("vendor restart requested");
            return Dispatch {
                reply: Reply::Ack,
                action: Action::Restart,
            };
        }
        Command::Unknown(opcode) => {
            warn!("unknown command: {:#04x}", opcode);
            Reply::Empty
        }
    };

    Dispatch::reply(reply)
}

fn reply_for_rejected(frame: &[u8], err: &Error) -> Reply<'static> {
    match (frame.first().copied(), err) {
        (None, _) => {
            warn!("rx length is 0");
            Reply::Empty
        }
        (Some(CMD_READ), _) => {
            warn!("READ: bad rx length - {}", frame.len());
            Reply::Empty
        }
        (Some(opcode), err) => {
            warn!("command {:#04x} rejected: {}", opcode, err);
            Reply::Nak
        }
    }
}

fn read<'a>(page: PageIndex, memory: &'a TagMemory, config: &EmulatorConfig) -> Reply<'a> {
    let index = page.byte_offset();
    if !config.strict_read_bounds {
        return Reply::Data(memory.slice_truncated(index, READ_LEN));
    }
    match memory.slice(index, READ_LEN) {
        Ok(bytes) => Reply::Data(bytes),
        Err(err) => {
            warn!("READ: page {} out of bounds ({})", page, err);
            Reply::Nak
        }
    }
}

fn write(
    page: PageIndex,
    data: &[u8; PAGE_SIZE],
    session: &mut SessionState,
    memory: &mut TagMemory,
) -> Reply<'static> {
    if !session.backdoor {
        if page.as_u8() > MAX_USER_PAGE || is_locked(page, session.authenticated, memory) {
            debug!("WRITE: page {} refused", page);
            return Reply::Nak;
        }

        match page.as_u8() {
            // Lock bits only ever get set: OR into the static lock bytes.
            2 => return merge(STATIC_LOCK_LOW_OFFSET, &data[2..4], session, memory),
            3 => return merge(CONFIG_REGION_OFFSET, data, session, memory),
            // Dynamic lock bits are not interpreted; stored like any page.
            DYNAMIC_LOCK_PAGE => {}
            _ => {}
        }
    }

    let index = page.byte_offset();
    if index > MAX_BACKDOOR_WRITE_INDEX || (!session.backdoor && index > MAX_WRITE_INDEX) {
        warn!("WRITE: page oob - {}", page);
        return Reply::Nak;
    }

    match memory.write_at(index, data) {
        Ok(()) => {
            session.tag_modified = true;
            Reply::Ack
        }
        Err(err) => {
            warn!("WRITE: page {} failed ({})", page, err);
            Reply::Nak
        }
    }
}

fn merge(
    index: usize,
    data: &[u8],
    session: &mut SessionState,
    memory: &mut TagMemory,
) -> Reply<'static> {
    match memory.merge_at(index, data) {
        Ok(()) => {
            session.tag_modified = true;
            Reply::Ack
        }
        Err(err) => {
            warn!("WRITE: merge at {} failed ({})", index, err);
            Reply::Nak
        }
    }
}

fn fast_read<'a>(
    start: PageIndex,
    end: PageIndex,
    session: &mut SessionState,
    memory: &'a TagMemory,
    config: &'a EmulatorConfig,
) -> Reply<'a> {
    if start.as_u8() == BACKDOOR_START_PAGE && end.as_u8() == BACKDOOR_END_PAGE {
        session.backdoor = true;
        debug!("FAST_READ: backdoor enabled");
        return Reply::Data(&config.unlock_ack);
    }

    let len = (end.as_u8() - start.as_u8() + 1) as usize * PAGE_SIZE;
    match memory.slice(start.byte_offset(), len) {
        Ok(bytes) => Reply::Data(bytes),
        Err(err) => {
            warn!("FAST_READ: invalid address - {}:{} ({})", start, end, err);
            Reply::Nak
        }
    }
}
