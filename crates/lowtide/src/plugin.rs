use std::sync::Arc;

use lowtide_dsp::{db_to_linear, hard_clip, sanitize, Biquad, DenormalGuard, LinearRamp};
use lowtide_engine::{
    AudioBuffer, AudioProcessor, BufferConfig, ChannelLayout, PluginDescriptor, PluginError,
};
use lowtide_plugin_sdk::{
    ContinuousRange, NativePlugin, ParameterDefinition, ParameterLayout, ParameterStore,
    PluginFactory,
};

use crate::meter::PeakMeter;

pub const PARAM_VOLUME: &str = "VOL";
pub const PARAM_CUTOFF: &str = "LPF";

const MAX_CHANNELS: usize = 2;
const GAIN_RAMP_SECONDS: f32 = 0.050;

pub fn parameter_layout() -> ParameterLayout {
    ParameterLayout::new(vec![
        ParameterDefinition::new(
            PARAM_VOLUME,
            "Volume",
            ContinuousRange::new(-40.0..=40.0, 0.0),
        )
        .with_unit("dB")
        .with_description("Output level applied after the filter"),
        ParameterDefinition::new(
            PARAM_CUTOFF,
            "Low Pass Filter",
            ContinuousRange::new(20.0..=22_000.0, 800.0)
                .with_step(10.0)
                .with_skew(0.2),
        )
        .with_unit("Hz")
        .with_description("Cutoff frequency of the low-pass stage"),
    ])
}

fn descriptor() -> PluginDescriptor {
    PluginDescriptor::new("lowtide.effects.lowpass_volume", "Lowtide", "Lowtide Audio")
        .with_version("0.1.0")
        .with_description("Low-pass filter and volume stage with peak metering")
}

/// Per-channel audio-rate state, re-derived on prepare and zeroed on
/// reset. Fixed-size; never grows during processing.
#[derive(Clone, Copy, Debug)]
struct ChannelState {
    filter: Biquad,
    gain: LinearRamp,
}

impl ChannelState {
    fn new() -> Self {
        Self {
            filter: Biquad::new(),
            gain: LinearRamp::new(),
        }
    }
}

/// The Lowtide effect: low-pass filter, smoothed gain stage, peak
/// metering and a hard output clip, per block, in that order.
///
/// The parameter store and meter are shared with the editor through
/// `Arc`s; all cross-thread traffic goes through their atomics.
pub struct LowtidePlugin {
    store: Arc<ParameterStore>,
    meter: Arc<PeakMeter>,
    channels: [ChannelState; MAX_CHANNELS],
    prepared_channels: usize,
    sample_rate: f32,
    active: bool,
    slot_volume: usize,
    slot_cutoff: usize,
}

impl LowtidePlugin {
    pub fn new() -> Self {
        let store = Arc::new(ParameterStore::new(parameter_layout()));
        let slot_volume = store.index_of(PARAM_VOLUME).unwrap_or(0);
        let slot_cutoff = store.index_of(PARAM_CUTOFF).unwrap_or(1);
        Self {
            store,
            meter: Arc::new(PeakMeter::new()),
            channels: [ChannelState::new(); MAX_CHANNELS],
            prepared_channels: 0,
            sample_rate: 44_100.0,
            active: false,
            slot_volume,
            slot_cutoff,
        }
    }

    /// Handle the editor keeps for parameter edits.
    pub fn shared_store(&self) -> Arc<ParameterStore> {
        Arc::clone(&self.store)
    }

    /// Handle the editor keeps for the metering display.
    pub fn shared_meter(&self) -> Arc<PeakMeter> {
        Arc::clone(&self.meter)
    }

    /// Pulls the current parameter snapshots into audio-rate state. This
    /// is the only place coefficients and gain targets are recomputed.
    fn update(&mut self) {
        let cutoff = self.store.snapshot_at(self.slot_cutoff);
        let volume_db = self.store.snapshot_at(self.slot_volume);
        let target = db_to_linear(volume_db);
        for channel in &mut self.channels {
            channel.filter.set_lowpass(self.sample_rate, cutoff);
            channel.gain.set_target(target);
        }
        tracing::trace!(cutoff, volume_db, "applied parameter update");
    }

    fn reset_dsp(&mut self) {
        for channel in &mut self.channels {
            channel.filter.reset();
            channel.gain.reset(self.sample_rate, GAIN_RAMP_SECONDS);
        }
        self.meter.reset();
    }
}

impl Default for LowtidePlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioProcessor for LowtidePlugin {
    fn descriptor(&self) -> PluginDescriptor {
        descriptor()
    }

    fn prepare(&mut self, config: &BufferConfig) -> anyhow::Result<()> {
        if config.sample_rate <= 0.0 || config.max_block_size == 0 {
            return Err(PluginError::InvalidConfig(format!(
                "sample rate {} Hz, max block {}",
                config.sample_rate, config.max_block_size
            ))
            .into());
        }
        if !self.supports_layout(config.layout) {
            return Err(PluginError::UnsupportedLayout(config.layout).into());
        }

        self.sample_rate = config.sample_rate as f32;
        self.prepared_channels = (config.layout.channels() as usize).min(MAX_CHANNELS);
        // Consume any pending flag; the update below already covers it.
        let _ = self.store.take_dirty();
        self.update();
        self.reset_dsp();
        self.active = true;
        tracing::debug!(
            sample_rate = config.sample_rate,
            max_block_size = config.max_block_size,
            channels = self.prepared_channels,
            "prepared"
        );
        Ok(())
    }

    fn process(&mut self, buffer: &mut AudioBuffer) -> anyhow::Result<()> {
        if !self.active {
            return Ok(());
        }
        let _denormals = DenormalGuard::new();

        if self.store.take_dirty() {
            self.update();
        }

        let channel_count = buffer.channel_count().min(self.prepared_channels);

        // Undriven output channels may hold garbage; silence them instead
        // of processing past the prepared channel count.
        for channel in buffer.as_mut_slice().iter_mut().skip(channel_count) {
            channel.fill(0.0);
        }

        let mut max_sum = 0.0f32;
        for (data, state) in buffer
            .as_mut_slice()
            .iter_mut()
            .take(channel_count)
            .zip(self.channels.iter_mut())
        {
            state.filter.process_block(data);
            state.gain.apply_gain(data);

            // Meter before the clip so overs are visible on the display.
            let mut channel_max = 0.0f32;
            for sample in data.iter_mut() {
                let rectified = sample.abs();
                if rectified > channel_max {
                    channel_max = rectified;
                }
                *sample = hard_clip(sanitize(*sample));
            }
            self.meter.observe(channel_max);
            max_sum += channel_max;
        }

        if channel_count > 0 {
            self.meter.publish_block(max_sum / channel_count as f32);
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.reset_dsp();
    }

    fn release(&mut self) {
        self.active = false;
        tracing::debug!("released");
    }

    fn supports_layout(&self, layout: ChannelLayout) -> bool {
        matches!(layout, ChannelLayout::Mono | ChannelLayout::Stereo)
    }

    fn tail_seconds(&self) -> f64 {
        0.0
    }

    fn has_editor(&self) -> bool {
        true
    }
}

impl NativePlugin for LowtidePlugin {
    fn parameter_store(&self) -> &ParameterStore {
        &self.store
    }
}

pub struct LowtideFactory;

impl PluginFactory for LowtideFactory {
    fn descriptor(&self) -> PluginDescriptor {
        descriptor()
    }

    fn parameter_layout(&self) -> Arc<ParameterLayout> {
        Arc::new(parameter_layout())
    }

    fn create(&self) -> Box<dyn NativePlugin> {
        Box::new(LowtidePlugin::new())
    }
}
