use std::sync::atomic::Ordering;

use atomic_float::AtomicF32;

/// Peak levels written by the audio thread and read by the editor.
///
/// `local` is overwritten each block with the mean of the per-channel
/// maxima; `global` only ever grows between resets and is the true
/// maximum absolute sample value seen since the last reset.
#[derive(Debug, Default)]
pub struct PeakMeter {
    local: AtomicF32,
    global: AtomicF32,
}

impl PeakMeter {
    pub fn new() -> Self {
        Self {
            local: AtomicF32::new(0.0),
            global: AtomicF32::new(0.0),
        }
    }

    /// Folds a rectified value into the running all-time maximum.
    /// Compare-and-set under the hood; never a lock.
    #[inline]
    pub fn observe(&self, sample_abs: f32) {
        self.global.fetch_max(sample_abs, Ordering::Relaxed);
    }

    /// Publishes the block-level mean of the per-channel maxima.
    #[inline]
    pub fn publish_block(&self, channel_mean_max: f32) {
        self.local.store(channel_mean_max, Ordering::Relaxed);
    }

    pub fn local(&self) -> f32 {
        self.local.load(Ordering::Relaxed)
    }

    pub fn global(&self) -> f32 {
        self.global.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.local.store(0.0, Ordering::Relaxed);
        self.global.store(0.0, Ordering::Relaxed);
    }
}
