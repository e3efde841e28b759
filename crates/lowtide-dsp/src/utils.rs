/// Clamps a sample to the legal [-1, 1] output range.
#[inline]
pub fn hard_clip(sample: f32) -> f32 {
    sample.clamp(-1.0, 1.0)
}

/// Replaces NaN and infinite samples with silence so non-finite values from
/// an upstream processor never reach the output.
#[inline]
pub fn sanitize(sample: f32) -> f32 {
    if sample.is_finite() {
        sample
    } else {
        0.0
    }
}

/// Scoped flush-to-zero / denormals-are-zero mode for the audio thread.
///
/// Denormal intermediates in the filter feedback path stall the FPU; the
/// guard sets FTZ+DAZ on entry and restores the previous control word on
/// drop. No-op on non-x86_64 targets.
pub struct DenormalGuard {
    #[cfg(target_arch = "x86_64")]
    prev: u32,
}

impl DenormalGuard {
    #[inline]
    pub fn new() -> Self {
        #[cfg(target_arch = "x86_64")]
        #[allow(deprecated)]
        unsafe {
            use core::arch::x86_64::{_mm_getcsr, _mm_setcsr};
            const DAZ_FTZ: u32 = 0x8040;
            let prev = _mm_getcsr();
            _mm_setcsr(prev | DAZ_FTZ);
            return Self { prev };
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            Self {}
        }
    }
}

impl Default for DenormalGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "x86_64")]
impl Drop for DenormalGuard {
    fn drop(&mut self) {
        #[allow(deprecated)]
        unsafe {
            use core::arch::x86_64::_mm_setcsr;
            _mm_setcsr(self.prev);
        }
    }
}
