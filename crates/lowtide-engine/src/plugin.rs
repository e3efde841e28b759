use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{AudioBuffer, BufferConfig, ChannelLayout};

/// Metadata describing an effect to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginDescriptor {
    pub id: String,
    pub name: String,
    pub vendor: String,
    pub version: Option<String>,
    pub description: Option<String>,
}

impl PluginDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>, vendor: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            vendor: vendor.into(),
            version: None,
            description: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl fmt::Display for PluginDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.vendor)
    }
}

/// Errors a processor may report outside the audio path.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("plugin reported an invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("channel layout {0:?} is not supported")]
    UnsupportedLayout(ChannelLayout),
}

/// Block-processing contract between the host and an effect.
///
/// The host guarantees `prepare`, `process`, `reset` and `release` are
/// called sequentially from a single audio thread, never reentrantly and
/// never concurrently with each other. `process` must not allocate, block
/// or perform I/O; its cost is bounded by block length times channel
/// count.
pub trait AudioProcessor: Send + Sync {
    fn descriptor(&self) -> PluginDescriptor;

    /// Called before streaming starts and whenever the stream
    /// configuration changes. May allocate and derive state.
    fn prepare(&mut self, config: &BufferConfig) -> anyhow::Result<()>;

    /// Processes one block in place. Calling before `prepare` has
    /// completed is a contract violation; implementations treat it as a
    /// no-op rather than touching the buffer.
    fn process(&mut self, buffer: &mut AudioBuffer) -> anyhow::Result<()>;

    /// Reinitializes audio-rate state without tearing down the stream.
    /// Never called concurrently with `process`.
    fn reset(&mut self) {}

    /// Called when streaming stops; the processor returns to its
    /// unprepared state.
    fn release(&mut self) {}

    fn supports_layout(&self, layout: ChannelLayout) -> bool {
        matches!(layout, ChannelLayout::Mono | ChannelLayout::Stereo)
    }

    /// Processing latency in samples introduced by the processor.
    fn latency_samples(&self) -> usize {
        0
    }

    /// Length of the tail the host should keep rendering after input
    /// stops, in seconds.
    fn tail_seconds(&self) -> f64 {
        0.0
    }

    fn has_editor(&self) -> bool {
        false
    }

    fn accepts_midi(&self) -> bool {
        false
    }

    fn produces_midi(&self) -> bool {
        false
    }

    fn is_midi_effect(&self) -> bool {
        false
    }
}
