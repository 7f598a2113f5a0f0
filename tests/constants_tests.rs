// Host-side tests for tuning constants and their relationships.

use ripple_lab::core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn ripple_constants_are_positive() {
    assert!(BEATS_TO_TRAVERSE > 0.0);
    assert!(BAND_WIDTH > 0.0);
    assert!(MIN_RADIUS > 0.0);
    assert!(PULSE_DECAY_PER_SEC > 0.0);
    assert!(TRIGGER_THRESHOLD > 0.0 && TRIGGER_THRESHOLD < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn cycle_margin_clears_the_band() {
    // the front must be well past the farthest cell before it wraps to the origin
    let tail = (-0.5 * (CYCLE_MARGIN / BAND_WIDTH).powi(2)).exp();
    assert!(tail < 0.01, "amplitude at wrap is {tail}");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn limits_are_ordered() {
    assert!(BPM_MIN < BPM_MAX);
    assert!(SPEED_MIN < SPEED_MAX);
    assert!(SPEED_STEP_RATIO > 1.0);
    assert!(ACCENT_GAIN > PRIMARY_GAIN && PRIMARY_GAIN > SECONDARY_GAIN);
    assert!(ACCENT_GAIN <= 1.0 && SECONDARY_GAIN > 0.0);
}

#[test]
fn scale_steps_rise_within_one_octave() {
    assert_eq!(SCALE_STEPS.len(), 6);
    assert_eq!(SCALE_STEPS[0], 0.0);
    for pair in SCALE_STEPS.windows(2) {
        assert!(pair[1] > pair[0]);
    }
    assert!(SCALE_STEPS[5] < 12.0);
}
