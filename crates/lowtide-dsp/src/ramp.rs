/// Linear per-sample ramp toward a target gain.
///
/// An instantaneous gain jump is audible as a click; ramping over a short
/// fixed window removes it without perceptible latency. The ramp length is
/// set once via [`reset`](LinearRamp::reset) and every subsequent target
/// change re-ramps over that same number of samples.
#[derive(Clone, Copy, Debug)]
pub struct LinearRamp {
    current: f32,
    target: f32,
    step: f32,
    remaining: u32,
    ramp_samples: u32,
}

impl LinearRamp {
    #[inline]
    pub fn new() -> Self {
        Self {
            current: 1.0,
            target: 1.0,
            step: 0.0,
            remaining: 0,
            ramp_samples: 0,
        }
    }

    /// Fixes the ramp duration and snaps the current value onto the target,
    /// so a fresh stream does not ramp up from stale state.
    pub fn reset(&mut self, sample_rate: f32, ramp_seconds: f32) {
        self.ramp_samples = (sample_rate.max(1.0) * ramp_seconds.max(0.0)) as u32;
        self.current = self.target;
        self.step = 0.0;
        self.remaining = 0;
    }

    /// Starts a ramp from the current value to `target`. No-op when the
    /// target is already set.
    pub fn set_target(&mut self, target: f32) {
        if target == self.target {
            return;
        }
        self.target = target;
        if self.ramp_samples == 0 {
            self.current = target;
            self.step = 0.0;
            self.remaining = 0;
            return;
        }
        self.remaining = self.ramp_samples;
        self.step = (target - self.current) / self.ramp_samples as f32;
    }

    #[inline]
    pub fn is_smoothing(&self) -> bool {
        self.remaining > 0
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Advances one sample and returns the gain to apply. Holds the target
    /// exactly once the ramp completes.
    #[inline]
    pub fn next(&mut self) -> f32 {
        if self.remaining == 0 {
            return self.target;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.current = self.target;
            self.step = 0.0;
        } else {
            self.current += self.step;
        }
        self.current
    }

    /// Multiplies a block in place, advancing the ramp per sample.
    pub fn apply_gain(&mut self, samples: &mut [f32]) {
        if !self.is_smoothing() {
            let gain = self.target;
            if gain != 1.0 {
                for sample in samples {
                    *sample *= gain;
                }
            }
            return;
        }
        for sample in samples {
            *sample *= self.next();
        }
    }
}

impl Default for LinearRamp {
    fn default() -> Self {
        Self::new()
    }
}
