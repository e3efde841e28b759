//! Lowtide Engine
//! ==============
//! Host-boundary contracts for the Lowtide effect: the audio buffer the
//! host hands over per block, the stream configuration negotiated at
//! prepare time, and the processor trait the effect implements. The host
//! shim that adapts these to a concrete plugin format lives outside this
//! workspace.

pub mod buffer;
pub mod plugin;

pub use buffer::{AudioBuffer, BufferConfig, ChannelLayout};
pub use plugin::{AudioProcessor, PluginDescriptor, PluginError};

#[cfg(test)]
mod tests {
    use super::*;

    struct Passthrough {
        prepared: bool,
    }

    impl AudioProcessor for Passthrough {
        fn descriptor(&self) -> PluginDescriptor {
            PluginDescriptor::new("test.passthrough", "Passthrough", "Lowtide Audio")
        }

        fn prepare(&mut self, config: &BufferConfig) -> anyhow::Result<()> {
            if config.sample_rate <= 0.0 {
                return Err(PluginError::InvalidConfig("sample rate".into()).into());
            }
            self.prepared = true;
            Ok(())
        }

        fn process(&mut self, _buffer: &mut AudioBuffer) -> anyhow::Result<()> {
            assert!(self.prepared);
            Ok(())
        }
    }

    #[test]
    fn lifecycle_and_capability_defaults() {
        let mut plugin = Passthrough { prepared: false };
        let config = BufferConfig::new(48_000.0, 128, ChannelLayout::Stereo);
        plugin.prepare(&config).expect("prepare");

        let mut buffer = AudioBuffer::from_config(&config);
        assert_eq!(buffer.channel_count(), 2);
        assert_eq!(buffer.frames(), 128);
        plugin.process(&mut buffer).expect("process");

        // An effect without overrides reports no editor, no MIDI, no tail.
        assert!(!plugin.has_editor());
        assert!(!plugin.accepts_midi());
        assert!(!plugin.produces_midi());
        assert!(!plugin.is_midi_effect());
        assert_eq!(plugin.tail_seconds(), 0.0);
        assert_eq!(plugin.latency_samples(), 0);
        assert!(plugin.supports_layout(ChannelLayout::Mono));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut plugin = Passthrough { prepared: false };
        let config = BufferConfig::new(0.0, 128, ChannelLayout::Mono);
        assert!(plugin.prepare(&config).is_err());
    }
}
