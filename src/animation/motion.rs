use smallvec::SmallVec;

use crate::{
    animation::channel::Channel,
    animation::oscillator::Oscillator,
    foundation::error::StageResult,
};

/// One oscillator driving one channel.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MotionBinding<C> {
    pub channel: C,
    pub oscillator: Oscillator,
}

impl<C: Channel> MotionBinding<C> {
    pub fn new(channel: C, oscillator: Oscillator) -> Self {
        Self {
            channel,
            oscillator,
        }
    }

    /// Bind by dotted channel name; unknown names fail here, not per frame.
    pub fn named(channel: &str, oscillator: Oscillator) -> StageResult<Self> {
        Ok(Self::new(C::parse(channel)?, oscillator))
    }
}

/// Ordered binding list; bindings on the same channel sum.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Motion<C> {
    bindings: SmallVec<[MotionBinding<C>; 4]>,
}

impl<C> Default for Motion<C> {
    fn default() -> Self {
        Self {
            bindings: SmallVec::new(),
        }
    }
}

impl<C: Channel> Motion<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, channel: C, oscillator: Oscillator) -> Self {
        self.push(MotionBinding::new(channel, oscillator));
        self
    }

    pub fn push(&mut self, binding: MotionBinding<C>) {
        self.bindings.push(binding);
    }

    pub fn bindings(&self) -> &[MotionBinding<C>] {
        &self.bindings
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Replace degenerate oscillators with still ones.
    ///
    /// Returns the channels that were clamped, in binding order.
    pub fn sanitize(&mut self) -> Vec<C> {
        let mut clamped = Vec::new();
        for b in &mut self.bindings {
            if b.oscillator.is_degenerate() {
                b.oscillator = b.oscillator.sanitized();
                clamped.push(b.channel);
            }
        }
        clamped
    }

    /// Sum of every binding on `channel`, evaluated at `elapsed`.
    pub fn offset(&self, channel: C, elapsed: f64) -> f64 {
        self.bindings
            .iter()
            .filter(|b| b.channel == channel)
            .map(|b| b.oscillator.evaluate(elapsed))
            .sum()
    }

    /// Inclusive `(min, max)` envelope of [`Motion::offset`] on `channel`.
    pub fn range(&self, channel: C) -> (f64, f64) {
        self.bindings
            .iter()
            .filter(|b| b.channel == channel)
            .map(|b| b.oscillator.range())
            .fold((0.0, 0.0), |(lo, hi), (a, b)| (lo + a, hi + b))
    }
}

impl<C: Channel> FromIterator<MotionBinding<C>> for Motion<C> {
    fn from_iter<I: IntoIterator<Item = MotionBinding<C>>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/motion.rs"]
mod tests;
