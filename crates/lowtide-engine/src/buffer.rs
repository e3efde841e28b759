use serde::{Deserialize, Serialize};

/// Channel configuration negotiated with the host. Only mono and stereo
/// layouts are supported by the effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelLayout {
    Mono,
    Stereo,
}

impl ChannelLayout {
    pub fn channels(&self) -> u8 {
        match self {
            ChannelLayout::Mono => 1,
            ChannelLayout::Stereo => 2,
        }
    }
}

/// Stream configuration handed to a processor during preparation.
///
/// `max_block_size` is an upper bound; the host may deliver any block
/// length up to it, varying call to call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BufferConfig {
    pub sample_rate: f64,
    pub max_block_size: usize,
    pub layout: ChannelLayout,
}

impl BufferConfig {
    pub fn new(sample_rate: f64, max_block_size: usize, layout: ChannelLayout) -> Self {
        Self {
            sample_rate,
            max_block_size,
            layout,
        }
    }
}

/// Non-interleaved audio buffer processed in place.
///
/// Pre-sized by the host at prepare time; processors never grow it.
#[derive(Debug, Clone)]
pub struct AudioBuffer {
    channels: Vec<Vec<f32>>,
}

impl AudioBuffer {
    pub fn new(num_channels: usize, frames: usize) -> Self {
        let channels = (0..num_channels).map(|_| vec![0.0; frames]).collect();
        Self { channels }
    }

    pub fn from_config(config: &BufferConfig) -> Self {
        Self::new(config.layout.channels() as usize, config.max_block_size)
    }

    pub fn clear(&mut self) {
        for channel in &mut self.channels {
            channel.fill(0.0);
        }
    }

    /// Number of frames per channel; zero-length blocks are legal.
    pub fn frames(&self) -> usize {
        self.channels
            .first()
            .map(|channel| channel.len())
            .unwrap_or_default()
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    pub fn channels(&self) -> impl Iterator<Item = &Vec<f32>> {
        self.channels.iter()
    }

    pub fn channels_mut(&mut self) -> impl Iterator<Item = &mut Vec<f32>> {
        self.channels.iter_mut()
    }

    pub fn as_slice(&self) -> &[Vec<f32>] {
        &self.channels
    }

    pub fn as_mut_slice(&mut self) -> &mut [Vec<f32>] {
        &mut self.channels
    }
}
