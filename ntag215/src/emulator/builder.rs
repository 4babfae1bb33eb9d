// ntag215/src/emulator/builder.rs

use crate::config::EmulatorConfig;
use crate::emulator::handle::Emulator;
use crate::memory::{IdentityBuffer, TagMemory};
use crate::radio::{FieldObserver, NoopObserver, Radio};
use crate::{Error, Result};

/// Helper to construct an Emulator with optional configuration and
/// pre-bound buffers.
pub struct EmulatorBuilder<R> {
    radio: Option<R>,
    observer: Option<Box<dyn FieldObserver>>,
    config: EmulatorConfig,
    tag: Option<TagMemory>,
    identity: Option<Vec<u8>>,
}

impl<R: Radio> Default for EmulatorBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Radio> EmulatorBuilder<R> {
    pub fn new() -> Self {
        Self {
            radio: None,
            observer: None,
            config: EmulatorConfig::default(),
            tag: None,
            identity: None,
        }
    }

    /// Provide the radio front end (e.g. MockRadio)
    pub fn with_radio(mut self, radio: R) -> Self {
        self.radio = Some(radio);
        self
    }

    pub fn with_observer<O: FieldObserver + 'static>(mut self, observer: O) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn with_config(mut self, config: EmulatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_tag(mut self, tag: TagMemory) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Identity buffer bytes; laid out with the config's identity layout
    /// at build time.
    pub fn with_identity_buffer(mut self, bytes: Vec<u8>) -> Self {
        self.identity = Some(bytes);
        self
    }

    /// Consume the builder. Requires a radio; otherwise returns
    /// NotConfigured. The emulator is returned stopped.
    pub fn build(self) -> Result<Emulator<R>> {
        let radio = self.radio.ok_or(Error::NotConfigured("radio"))?;
        let identity = self
            .identity
            .map(|bytes| IdentityBuffer::with_layout(bytes, self.config.identity_layout.clone()))
            .transpose()?;
        let observer = self
            .observer
            .unwrap_or_else(|| Box::new(NoopObserver));

        let mut emulator = Emulator::with_parts(radio, observer, self.config);
        if let Some(tag) = self.tag {
            emulator.bind_tag(tag)?;
        }
        if let Some(identity) = identity {
            emulator.bind_identity(identity)?;
        }
        Ok(emulator)
    }
}
