// ntag215/src/emulator/session.rs

use crate::types::FieldState;

/// Session flags shared by the field event handler and the dispatcher.
///
/// `authenticated` and `backdoor` only mean something while a field is
/// present and are cleared when it goes away. `tag_modified` is sticky and
/// only the host clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionState {
    pub(crate) field: FieldState,
    pub(crate) authenticated: bool,
    pub(crate) backdoor: bool,
    pub(crate) tag_modified: bool,
    pub(crate) session_active: bool,
}

impl SessionState {
    pub fn field(&self) -> FieldState {
        self.field
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn is_backdoor(&self) -> bool {
        self.backdoor
    }

    pub fn is_tag_modified(&self) -> bool {
        self.tag_modified
    }

    pub fn is_session_active(&self) -> bool {
        self.session_active
    }

    pub(crate) fn field_activated(&mut self) {
        self.field = FieldState::FieldPresent;
    }

    pub(crate) fn begin(&mut self) {
        self.authenticated = false;
        self.backdoor = false;
        self.session_active = true;
    }

    pub(crate) fn field_deactivated(&mut self) {
        self.authenticated = false;
        self.backdoor = false;
        self.field = FieldState::Idle;
    }
}

/// Per-emulator reply counters, kept when the `diagnostics` feature is on.
#[cfg(feature = "diagnostics")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchStats {
    pub frames: u64,
    pub data: u64,
    pub acks: u64,
    pub naks: u64,
    pub empty: u64,
    pub send_errors: u64,
}

#[cfg(feature = "diagnostics")]
impl DispatchStats {
    pub(crate) fn record(&mut self, reply: &crate::protocol::Reply<'_>) {
        use crate::protocol::Reply;
        self.frames += 1;
        match reply {
            Reply::Data(_) => self.data += 1,
            Reply::Ack => self.acks += 1,
            Reply::Nak => self.naks += 1,
            Reply::Empty => self.empty += 1,
        }
    }
}
