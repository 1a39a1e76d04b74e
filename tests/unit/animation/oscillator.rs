use super::*;
use std::f64::consts::{FRAC_PI_2, PI};

#[test]
fn sine_peaks_at_quarter_turn() {
    let osc = Oscillator::sine(1.0, 1.0);
    assert!((osc.evaluate(FRAC_PI_2) - 1.0).abs() < 1e-12);
    assert!(osc.evaluate(0.0).abs() < 1e-12);
}

#[test]
fn cosine_matches_shifted_sine() {
    let c = Oscillator::cosine(0.5, 0.8);
    let s = Oscillator::sine(0.5, 0.8).with_phase(FRAC_PI_2);
    for t in [0.0, 0.3, 1.7, 42.0] {
        assert!((c.evaluate(t) - s.evaluate(t)).abs() < 1e-12);
    }
}

#[test]
fn zero_frequency_is_constant() {
    for kind in [OscKind::Sine, OscKind::Cosine, OscKind::Sawtooth] {
        let osc = Oscillator::new(kind, 2.0, 0.0).with_phase(0.7);
        let v0 = osc.evaluate(0.0);
        for t in [0.1, 5.0, 1e6] {
            assert_eq!(osc.evaluate(t), v0);
        }
    }
    let osc = Oscillator::sine(2.0, 0.0).with_phase(0.7);
    assert!((osc.evaluate(9.0) - 2.0 * 0.7f64.sin()).abs() < 1e-12);
}

#[test]
fn looped_timing_repeats_each_period() {
    let osc = Oscillator::sine(0.12, 1.0).looped(8.0).with_offset(2.0);
    for t in [0.0, 1.25, 3.5, 7.9] {
        assert!((osc.evaluate(t) - osc.evaluate(t + 8.0)).abs() < 1e-9);
        assert!((osc.evaluate(t) - osc.evaluate(t + 800.0)).abs() < 1e-9);
    }
}

#[test]
fn looped_offset_shifts_the_cycle() {
    let base = Oscillator::sine(1.0, 1.0).looped(8.0);
    let delayed = base.with_offset(2.0);
    // Two seconds into an eight second loop is a quarter turn.
    assert!((delayed.evaluate(0.0) - 1.0).abs() < 1e-12);
    assert!((base.evaluate(2.0) - 1.0).abs() < 1e-12);
}

#[test]
fn sawtooth_wraps_within_amplitude() {
    let osc = Oscillator::sawtooth(4.0, 2.0 * PI);
    assert!(osc.evaluate(0.0).abs() < 1e-12);
    assert!((osc.evaluate(0.25) - 1.0).abs() < 1e-9);
    assert!((osc.evaluate(1.25) - 1.0).abs() < 1e-9);
    for t in [0.0, 0.5, 0.99, 123.4] {
        let v = osc.evaluate(t);
        assert!((0.0..4.0).contains(&v));
    }
    assert_eq!(osc.range(), (0.0, 4.0));
    assert_eq!(Oscillator::sawtooth(-1.0, 1.0).range(), (-1.0, 0.0));
}

#[test]
fn degenerate_parameters_collapse_to_still() {
    let bad = [
        Oscillator::sine(f64::NAN, 1.0),
        Oscillator::sine(1.0, f64::INFINITY),
        Oscillator::sine(1.0, 1.0).with_phase(f64::NAN),
        Oscillator::sine(1.0, 1.0).looped(0.0),
        Oscillator::sine(1.0, 1.0).looped(f64::NAN),
    ];
    for osc in bad {
        assert!(osc.is_degenerate());
        let s = osc.sanitized();
        assert!(!s.is_degenerate());
        assert_eq!(s.evaluate(3.0), 0.0);
    }
    assert_eq!(Oscillator::sine(f64::NAN, 1.0).evaluate(1.0), 0.0);
}

#[test]
fn deserializes_with_defaults() {
    let osc: Oscillator = serde_json::from_str(
        r#"{"kind":"sine","amplitude":0.12,"frequency":1.0,"timing":{"mode":"looped","period":8.0}}"#,
    )
    .unwrap();
    assert_eq!(osc.phase, 0.0);
    assert_eq!(osc.timing, Timing::Looped { period: 8.0 });
}
