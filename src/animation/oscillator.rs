use std::f64::consts::TAU;

use crate::foundation::math::wrap_unit;

/// Waveform of an [`Oscillator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OscKind {
    /// `amplitude * sin(angle)`
    Sine,
    /// `amplitude * cos(angle)`
    Cosine,
    /// Wrapped ramp `amplitude * frac(angle / TAU)`, in `[0, amplitude)`.
    Sawtooth,
}

/// How elapsed time maps onto the oscillator angle.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Timing {
    /// `angle = frequency * t + phase`, frequency in rad/s.
    #[default]
    Free,
    /// `angle = frequency * TAU * ((t mod period) / period) + phase`,
    /// frequency in cycles per period.
    Looped { period: f64 },
}

/// Pure periodic function of elapsed time.
///
/// An oscillator holds no state: the same `(spec, elapsed)` pair always
/// evaluates to the same value, so scenes can be sampled at arbitrary times.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Oscillator {
    pub kind: OscKind,
    pub amplitude: f64,
    pub frequency: f64,
    /// Angle offset in radians.
    #[serde(default)]
    pub phase: f64,
    /// Time shift in seconds, applied before any looping.
    #[serde(default)]
    pub offset_secs: f64,
    #[serde(default)]
    pub timing: Timing,
}

impl Oscillator {
    pub fn new(kind: OscKind, amplitude: f64, frequency: f64) -> Self {
        Self {
            kind,
            amplitude,
            frequency,
            phase: 0.0,
            offset_secs: 0.0,
            timing: Timing::Free,
        }
    }

    pub fn sine(amplitude: f64, frequency: f64) -> Self {
        Self::new(OscKind::Sine, amplitude, frequency)
    }

    pub fn cosine(amplitude: f64, frequency: f64) -> Self {
        Self::new(OscKind::Cosine, amplitude, frequency)
    }

    pub fn sawtooth(amplitude: f64, frequency: f64) -> Self {
        Self::new(OscKind::Sawtooth, amplitude, frequency)
    }

    /// Zero-motion oscillator; evaluates to `0.0` everywhere.
    pub fn still() -> Self {
        Self::sine(0.0, 0.0)
    }

    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    pub fn with_offset(mut self, secs: f64) -> Self {
        self.offset_secs = secs;
        self
    }

    pub fn looped(mut self, period: f64) -> Self {
        self.timing = Timing::Looped { period };
        self
    }

    /// True when any parameter would poison the output with NaN or infinity.
    pub fn is_degenerate(&self) -> bool {
        let looped_bad = match self.timing {
            Timing::Free => false,
            Timing::Looped { period } => !period.is_finite() || period <= 0.0,
        };
        !self.amplitude.is_finite()
            || !self.frequency.is_finite()
            || !self.phase.is_finite()
            || !self.offset_secs.is_finite()
            || looped_bad
    }

    /// Degenerate parameters collapse to [`Oscillator::still`].
    pub fn sanitized(self) -> Self {
        if self.is_degenerate() {
            Self {
                kind: self.kind,
                ..Self::still()
            }
        } else {
            self
        }
    }

    pub fn angle(&self, elapsed: f64) -> f64 {
        let t = elapsed + self.offset_secs;
        match self.timing {
            Timing::Free => self.frequency * t + self.phase,
            Timing::Looped { period } => self.frequency * TAU * wrap_unit(t, period) + self.phase,
        }
    }

    /// Scalar output at `elapsed` seconds. Never returns a non-finite value.
    pub fn evaluate(&self, elapsed: f64) -> f64 {
        let angle = self.angle(elapsed);
        let v = match self.kind {
            OscKind::Sine => self.amplitude * angle.sin(),
            OscKind::Cosine => self.amplitude * angle.cos(),
            OscKind::Sawtooth => self.amplitude * (angle / TAU).rem_euclid(1.0),
        };
        if v.is_finite() { v } else { 0.0 }
    }

    /// Inclusive `(min, max)` envelope of [`Oscillator::evaluate`].
    pub fn range(&self) -> (f64, f64) {
        let a = self.amplitude;
        match self.kind {
            OscKind::Sine | OscKind::Cosine => (-a.abs(), a.abs()),
            OscKind::Sawtooth => (a.min(0.0), a.max(0.0)),
        }
    }
}

/// Evaluate `spec` at `elapsed`; free-function form of [`Oscillator::evaluate`].
pub fn evaluate(spec: &Oscillator, elapsed: f64) -> f64 {
    spec.evaluate(elapsed)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/oscillator.rs"]
mod tests;
