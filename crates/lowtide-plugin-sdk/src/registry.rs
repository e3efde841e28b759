use std::sync::Arc;

use lowtide_engine::{AudioProcessor, PluginDescriptor};

use crate::{state, ParameterError, ParameterLayout, ParameterStore};

/// Capability contract for effects built on this SDK: an
/// [`AudioProcessor`] that additionally exposes a parameter store and
/// parameter-state persistence.
pub trait NativePlugin: AudioProcessor {
    fn parameter_store(&self) -> &ParameterStore;

    fn parameter_layout(&self) -> &ParameterLayout {
        self.parameter_store().layout()
    }

    /// Control-rate edit entry point used by editors and host automation.
    fn set_parameter(&self, id: &str, value: f32) -> Result<(), ParameterError> {
        self.parameter_store().set(id, value)?;
        self.on_parameter_changed(id);
        Ok(())
    }

    /// Notification hook fired after any parameter edit. May run on a
    /// non-audio thread, so implementations must stay side-effect minimal;
    /// the pending change is already flagged for the audio thread.
    fn on_parameter_changed(&self, _id: &str) {}

    fn save_state(&self) -> Vec<u8> {
        state::encode_state(self.parameter_store())
    }

    fn load_state(&self, blob: &[u8]) {
        state::decode_state(self.parameter_store(), blob);
    }
}

/// Creates plugin instances for hosts that enumerate available effects.
pub trait PluginFactory: Send + Sync {
    fn descriptor(&self) -> PluginDescriptor;
    fn parameter_layout(&self) -> Arc<ParameterLayout>;
    fn create(&self) -> Box<dyn NativePlugin>;
}

/// Collection of factories exposed by one plugin module.
#[derive(Default)]
pub struct PluginModule {
    factories: Vec<Box<dyn PluginFactory>>,
}

impl PluginModule {
    pub fn new() -> Self {
        Self {
            factories: Vec::new(),
        }
    }

    pub fn register_factory(&mut self, factory: Box<dyn PluginFactory>) -> &mut Self {
        self.factories.push(factory);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn PluginFactory> {
        self.factories.iter().map(|factory| factory.as_ref())
    }

    pub fn into_factories(self) -> Vec<Box<dyn PluginFactory>> {
        self.factories
    }
}
