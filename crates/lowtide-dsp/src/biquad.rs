use std::f32::consts::{FRAC_1_SQRT_2, PI};

/// Two-pole low-pass filter with Butterworth response.
///
/// Coefficients are derived from the cutoff frequency and sample rate;
/// recomputing them is cheap but still only expected when a parameter
/// actually changed, not per block.
#[derive(Clone, Copy, Debug)]
pub struct Biquad {
    b0: f32,
    b1: f32,
    b2: f32,
    a1: f32,
    a2: f32,
    z1: f32,
    z2: f32,
}

impl Biquad {
    #[inline]
    pub fn new() -> Self {
        Self {
            b0: 1.0,
            b1: 0.0,
            b2: 0.0,
            a1: 0.0,
            a2: 0.0,
            z1: 0.0,
            z2: 0.0,
        }
    }

    #[inline]
    pub fn lowpass(sample_rate: f32, cutoff_hz: f32) -> Self {
        let mut s = Self::new();
        s.set_lowpass(sample_rate, cutoff_hz);
        s
    }

    /// Recomputes the taps for a low-pass response at `cutoff_hz`.
    ///
    /// The cutoff is clamped below Nyquist so the filter stays stable for
    /// any host-supplied value. Does not touch the history, so a running
    /// stream keeps its state across a coefficient change.
    #[inline]
    pub fn set_lowpass(&mut self, sample_rate: f32, cutoff_hz: f32) {
        let sr = sample_rate.max(1.0);
        let cutoff = cutoff_hz.clamp(10.0, 0.45 * sr);
        let omega = 2.0 * PI * (cutoff / sr);
        let alpha = omega.sin() * 0.5 / FRAC_1_SQRT_2;
        let cos = omega.cos();

        let b1 = 1.0 - cos;
        let b0 = 0.5 * b1;
        let a0 = 1.0 + alpha;
        let a1 = -2.0 * cos;
        let a2 = 1.0 - alpha;

        let inv_a0 = 1.0 / a0;
        self.b0 = b0 * inv_a0;
        self.b1 = b1 * inv_a0;
        self.b2 = b0 * inv_a0;
        self.a1 = a1 * inv_a0;
        self.a2 = a2 * inv_a0;
    }

    #[inline]
    pub fn reset(&mut self) {
        self.z1 = 0.0;
        self.z2 = 0.0;
    }

    /// Transposed direct form II, one sample in, one sample out.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let output = self.b0 * input + self.z1;
        self.z1 = self.b1 * input - self.a1 * output + self.z2;
        self.z2 = self.b2 * input - self.a2 * output;
        output
    }

    #[inline]
    pub fn process_block(&mut self, samples: &mut [f32]) {
        for sample in samples {
            *sample = self.process(*sample);
        }
    }
}

impl Default for Biquad {
    fn default() -> Self {
        Self::new()
    }
}
