use lowtide_dsp::ramp::LinearRamp;

const SR: f32 = 44_100.0;
const RAMP_SECONDS: f32 = 0.050;
const RAMP_SAMPLES: u32 = (SR * RAMP_SECONDS) as u32; // 2205

#[test]
fn reaches_target_after_ramp_duration() {
    let mut ramp = LinearRamp::new();
    ramp.reset(SR, RAMP_SECONDS);
    ramp.set_target(0.01); // -40 dB from unity

    let mut gain = ramp.current();
    for _ in 0..RAMP_SAMPLES {
        gain = ramp.next();
    }
    assert!((gain - 0.01).abs() <= 0.01 * 0.01, "gain {gain} not within 1%");
    assert!(!ramp.is_smoothing());
    // Holds at the target afterwards.
    assert_eq!(ramp.next(), 0.01);
}

#[test]
fn does_not_jump_immediately() {
    let mut ramp = LinearRamp::new();
    ramp.reset(SR, RAMP_SECONDS);
    ramp.set_target(0.01);

    // After a quarter of the ramp the gain is still far from the target.
    for _ in 0..(RAMP_SAMPLES / 4) {
        ramp.next();
    }
    assert!(ramp.current() > 0.5);
    assert!(ramp.is_smoothing());
}

#[test]
fn reset_snaps_current_to_target() {
    let mut ramp = LinearRamp::new();
    ramp.reset(SR, RAMP_SECONDS);
    ramp.set_target(0.25);
    ramp.next();
    assert!(ramp.is_smoothing());

    // A stream restart must not ramp up from mid-flight state.
    ramp.reset(SR, RAMP_SECONDS);
    assert!(!ramp.is_smoothing());
    assert_eq!(ramp.current(), 0.25);
}

#[test]
fn zero_length_ramp_jumps() {
    let mut ramp = LinearRamp::new();
    ramp.reset(SR, 0.0);
    ramp.set_target(2.0);
    assert_eq!(ramp.current(), 2.0);
    assert!(!ramp.is_smoothing());
}

#[test]
fn apply_gain_ramps_across_block() {
    let mut ramp = LinearRamp::new();
    ramp.reset(SR, RAMP_SECONDS);
    ramp.set_target(0.0);

    let mut block = vec![1.0f32; RAMP_SAMPLES as usize];
    ramp.apply_gain(&mut block);

    // Strictly decreasing toward silence, ending at the target.
    assert!(block[0] > block[RAMP_SAMPLES as usize / 2]);
    assert_eq!(*block.last().unwrap(), 0.0);

    let mut tail = vec![1.0f32; 64];
    ramp.apply_gain(&mut tail);
    assert!(tail.iter().all(|s| *s == 0.0));
}

#[test]
fn retarget_mid_ramp_restarts_from_current() {
    let mut ramp = LinearRamp::new();
    ramp.reset(SR, RAMP_SECONDS);
    ramp.set_target(0.0);
    for _ in 0..100 {
        ramp.next();
    }
    let mid = ramp.current();
    ramp.set_target(1.0);
    let next = ramp.next();
    assert!(next >= mid, "ramp should turn around from {mid}, got {next}");
}
