//! Lowtide Plugin SDK
//! ==================
//!
//! Parameter machinery for effects built on [`lowtide_engine`]: parameter
//! definitions and layouts, the lock-free [`ParameterStore`] shared
//! between the control and audio threads, persistence of parameter state,
//! and the [`NativePlugin`]/[`PluginFactory`] registration contracts.

mod parameters;
mod registry;
mod state;
mod store;

pub use parameters::{
    ContinuousRange, ParameterDefinition, ParameterError, ParameterId, ParameterLayout,
};
pub use registry::{NativePlugin, PluginFactory, PluginModule};
pub use state::{decode_state, encode_state};
pub use store::ParameterStore;

/// Common imports for plugin authors.
pub mod prelude {
    pub use crate::{
        ContinuousRange, NativePlugin, ParameterDefinition, ParameterId, ParameterLayout,
        ParameterStore, PluginFactory, PluginModule,
    };
    pub use lowtide_engine::{
        AudioBuffer, AudioProcessor, BufferConfig, ChannelLayout, PluginDescriptor,
    };
}
