use lowtide_dsp::biquad::Biquad;
use proptest::prelude::*;

#[test]
fn lowpass_stability() {
    let mut filter = Biquad::lowpass(48_000.0, 1_000.0);
    let mut y = 0.0;
    for _ in 0..10_000 {
        y = filter.process(1.0);
    }
    assert!(y.is_finite());
    // DC gain of a low-pass is unity.
    assert!((y - 1.0).abs() < 1e-3);
}

#[test]
fn impulse_response_decays() {
    let mut filter = Biquad::lowpass(44_100.0, 800.0);
    let mut tail = 0.0f32;
    let first = filter.process(1.0);
    assert!(first.is_finite());
    for _ in 0..44_100 {
        tail = filter.process(0.0);
    }
    assert!(tail.abs() < 1e-6, "impulse response did not decay: {tail}");
}

#[test]
fn cutoff_clamped_near_nyquist() {
    // 22 kHz cutoff at a 44.1 kHz rate lands above the internal clamp;
    // the filter must still be stable.
    let mut filter = Biquad::lowpass(44_100.0, 22_000.0);
    let mut y = 0.0;
    for i in 0..10_000 {
        y = filter.process(if i % 2 == 0 { 1.0 } else { -1.0 });
    }
    assert!(y.is_finite());
}

#[test]
fn reset_clears_history() {
    let mut filter = Biquad::lowpass(48_000.0, 500.0);
    for _ in 0..64 {
        filter.process(1.0);
    }
    filter.reset();
    let mut fresh = Biquad::lowpass(48_000.0, 500.0);
    assert_eq!(filter.process(0.25), fresh.process(0.25));
}

proptest! {
    // Bounded input must give bounded output over the whole supported
    // cutoff/sample-rate space.
    #[test]
    fn bounded_in_bounded_out(
        cutoff in 20.0f32..22_000.0,
        sample_rate in 44_100.0f32..192_000.0,
        seed in any::<u64>(),
    ) {
        let mut filter = Biquad::lowpass(sample_rate, cutoff);
        let mut state = seed;
        for _ in 0..4_096 {
            // xorshift noise in [-1, 1]
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let x = (state as i32 as f32) / (i32::MAX as f32);
            let y = filter.process(x);
            prop_assert!(y.is_finite());
            prop_assert!(y.abs() < 8.0, "runaway gain: {}", y);
        }
    }
}
