// ntag215/src/emulator/handle.rs

use log::{debug, trace, warn};

use crate::config::EmulatorConfig;
use crate::memory::{IdentityBuffer, TagMemory};
use crate::protocol::{Action, Reply, dispatch, fix_uid};
use crate::radio::{FieldObserver, NoopObserver, Radio};
use crate::types::{FieldEvent, RadioStatus};
use crate::utils::HexBytes;
use crate::{Error, Result};

use super::session::SessionState;

/// Tag emulation engine: owns the tag memory, the identity buffer and the
/// session flags, and answers reader frames through a `Radio`.
///
/// Every entry point takes `&mut self`, so a frame is always answered before
/// the next event can be handled. Buffers cannot be rebound while a session
/// is active.
pub struct Emulator<R> {
    radio: R,
    observer: Box<dyn FieldObserver>,
    config: EmulatorConfig,
    memory: Option<TagMemory>,
    identity: Option<IdentityBuffer>,
    session: SessionState,
    #[cfg(feature = "diagnostics")]
    stats: super::session::DispatchStats,
}

impl<R: Radio> Emulator<R> {
    /// Create an emulator with the default NTAG215 configuration.
    pub fn new(radio: R) -> Self {
        Self::with_parts(radio, Box::new(NoopObserver), EmulatorConfig::default())
    }

    pub(crate) fn with_parts(
        radio: R,
        observer: Box<dyn FieldObserver>,
        config: EmulatorConfig,
    ) -> Self {
        Self {
            radio,
            observer,
            config,
            memory: None,
            identity: None,
            session: SessionState::default(),
            #[cfg(feature = "diagnostics")]
            stats: Default::default(),
        }
    }

    fn ensure_inactive(&self) -> Result<()> {
        if self.session.session_active {
            return Err(Error::SessionActive);
        }
        Ok(())
    }

    /// Bind tag memory (at least 572 bytes). Rejected while a session is
    /// active; a rejected bind keeps the previous binding.
    pub fn bind_tag_memory(&mut self, bytes: Vec<u8>) -> Result<()> {
        self.ensure_inactive()?;
        self.memory = Some(TagMemory::new(bytes)?);
        Ok(())
    }

    pub fn bind_tag(&mut self, memory: TagMemory) -> Result<()> {
        self.ensure_inactive()?;
        self.memory = Some(memory);
        Ok(())
    }

    /// Bind the identity buffer (at least 32 bytes) using the configured
    /// layout.
    pub fn bind_identity_buffer(&mut self, bytes: Vec<u8>) -> Result<()> {
        self.ensure_inactive()?;
        let identity = IdentityBuffer::with_layout(bytes, self.config.identity_layout.clone())?;
        self.identity = Some(identity);
        Ok(())
    }

    pub fn bind_identity(&mut self, identity: IdentityBuffer) -> Result<()> {
        self.ensure_inactive()?;
        self.identity = Some(identity);
        Ok(())
    }

    /// Hand the tag memory back to the host, e.g. to persist it.
    pub fn unbind_tag_memory(&mut self) -> Result<Option<TagMemory>> {
        self.ensure_inactive()?;
        Ok(self.memory.take())
    }

    pub fn tag_memory(&self) -> Option<&TagMemory> {
        self.memory.as_ref()
    }

    /// Mutable access for the host while no session is running.
    pub fn tag_memory_mut(&mut self) -> Result<&mut TagMemory> {
        self.ensure_inactive()?;
        self.memory.as_mut().ok_or(Error::NotConfigured("tag memory"))
    }

    pub fn identity(&self) -> Option<&IdentityBuffer> {
        self.identity.as_ref()
    }

    /// Repair the UID check bytes. Returns whether anything was rewritten.
    pub fn fix_uid(&mut self) -> Result<bool> {
        let memory = self
            .memory
            .as_mut()
            .ok_or(Error::NotConfigured("tag memory"))?;
        if self.identity.is_none() {
            return Err(Error::NotConfigured("identity buffer"));
        }
        let fixed = fix_uid(memory);
        if fixed {
            debug!("uid check bytes repaired");
        }
        Ok(fixed)
    }

    pub fn set_modified(&mut self, value: bool) {
        self.session.tag_modified = value;
    }

    pub fn is_modified(&self) -> bool {
        self.session.tag_modified
    }

    /// Start a session: derive the NFCID from the UID pages, configure the
    /// radio and start it. The status of the radio start call is returned
    /// as-is; configuration failures before it are only logged.
    ///
    /// Authentication and backdoor state left over from a previous session
    /// is cleared.
    pub fn start(&mut self) -> Result<RadioStatus> {
        if self.memory.is_none() {
            return Err(Error::NotConfigured("tag memory"));
        }
        if self.identity.is_none() {
            return Err(Error::NotConfigured("identity buffer"));
        }

        self.stop();

        let uid = match &self.memory {
            Some(memory) => memory.uid(),
            None => return Err(Error::NotConfigured("tag memory")),
        };
        let nfcid = match self.identity.as_mut() {
            Some(identity) => {
                identity.set_uid(&uid);
                identity.uid_bytes()
            }
            None => return Err(Error::NotConfigured("identity buffer")),
        };

        let identity_status = self.radio.set_identity_parameter(nfcid);
        if !identity_status.is_success() {
            warn!("set identity parameter failed: status={}", identity_status);
        }
        let setup_status = self.radio.setup();
        if !setup_status.is_success() {
            warn!("radio setup failed: status={}", setup_status);
        }
        let status = self.radio.start();
        self.session.begin();

        debug!("session started: nfcid={} status={}", uid.to_hex(), status);
        Ok(status)
    }

    /// Stop the radio and end the session. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.radio.stop();
        self.radio.teardown();
        self.session.session_active = false;
    }

    pub fn restart(&mut self) -> Result<RadioStatus> {
        self.stop();
        self.start()
    }

    /// Handle one radio event. Events outside an active session are dropped.
    pub fn handle_event(&mut self, event: FieldEvent) {
        if !self.session.session_active {
            warn!("no active session, dropping {:?}", event);
            return;
        }

        match event {
            FieldEvent::FieldOn => {
                debug!("field on");
                self.session.field_activated();
                self.observer.field_activated();
            }
            FieldEvent::FieldOff => {
                debug!("field off");
                self.session.field_deactivated();
                self.observer.field_deactivated();
            }
            FieldEvent::DataReceived(frame) => self.handle_frame(&frame),
            FieldEvent::DataTransmitted => trace!("data transmitted"),
            FieldEvent::Other(id) => warn!("unknown nfc event: {}", id),
        }
    }

    /// Feed a batch of events in order.
    pub fn drain<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = FieldEvent>,
    {
        for event in events {
            self.handle_event(event);
        }
    }

    pub(crate) fn handle_frame(&mut self, frame: &[u8]) {
        trace!("rx [{}]", HexBytes(frame));

        let Some(memory) = self.memory.as_mut() else {
            warn!("frame received with no tag memory bound");
            if let Err(err) = Reply::Empty.emit(&mut self.radio) {
                warn!("failed to send reply: {}", err);
            }
            return;
        };

        let outcome = dispatch(frame, &mut self.session, memory, &self.config);
        if let Reply::Data(bytes) = outcome.reply {
            trace!("tx [{}]", HexBytes(bytes));
        } else {
            trace!("tx {:?}", outcome.reply);
        }

        if let Err(err) = outcome.reply.emit(&mut self.radio) {
            warn!("failed to send reply: {}", err);
            #[cfg(feature = "diagnostics")]
            {
                self.stats.send_errors += 1;
            }
        }
        #[cfg(feature = "diagnostics")]
        self.stats.record(&outcome.reply);

        if outcome.action == Action::Restart {
            match self.restart() {
                Ok(status) if status.is_success() => debug!("session restarted"),
                Ok(status) => warn!("restart: radio status {}", status),
                Err(err) => warn!("restart failed: {}", err),
            }
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    pub fn radio(&self) -> &R {
        &self.radio
    }

    pub fn radio_mut(&mut self) -> &mut R {
        &mut self.radio
    }

    #[cfg(feature = "diagnostics")]
    pub fn stats(&self) -> &super::session::DispatchStats {
        &self.stats
    }
}
