use std::fmt;
use std::rc::Rc;

use crate::{
    animation::channel::NodeChannel,
    animation::motion::{Motion, MotionBinding},
    animation::oscillator::Oscillator,
    foundation::core::Vec3,
    graph::node::NodeSpec,
    graph::primitive::{Material, Primitive},
};

/// Per-index phase offset in radians.
pub type PhaseFn = Rc<dyn Fn(usize) -> f64>;

/// `index * step`; the usual way clones are desynchronized.
pub fn linear_phase(step: f64) -> PhaseFn {
    Rc::new(move |i| i as f64 * step)
}

/// Places `count` copies of one node template around a horizontal circle.
///
/// The generator is a recipe, not a cursor: every call to
/// [`RingGenerator::iter`] starts over and yields the same specs.
#[derive(Clone)]
pub struct RingGenerator {
    id_prefix: String,
    count: usize,
    radius: f64,
    /// Angle between consecutive items, in radians.
    angle_step: f64,
    height: f64,
    primitive: Primitive,
    material: Option<Material>,
    motion: Vec<(NodeChannel, Oscillator)>,
    phase: PhaseFn,
}

impl RingGenerator {
    pub fn new(
        id_prefix: impl Into<String>,
        count: usize,
        radius: f64,
        primitive: Primitive,
    ) -> Self {
        let angle_step = if count == 0 {
            0.0
        } else {
            std::f64::consts::TAU / count as f64
        };
        Self {
            id_prefix: id_prefix.into(),
            count,
            radius,
            angle_step,
            height: 0.0,
            primitive,
            material: None,
            motion: Vec::new(),
            phase: linear_phase(0.0),
        }
    }

    pub fn angle_step(mut self, radians: f64) -> Self {
        self.angle_step = radians;
        self
    }

    pub fn height(mut self, y: f64) -> Self {
        self.height = y;
        self
    }

    pub fn material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    /// Motion shared by every item; each copy adds `phase(index)`.
    pub fn bind(mut self, channel: NodeChannel, oscillator: Oscillator) -> Self {
        self.motion.push((channel, oscillator));
        self
    }

    pub fn phase(mut self, phase: PhaseFn) -> Self {
        self.phase = phase;
        self
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn spec_at(&self, index: usize) -> Option<NodeSpec> {
        if index >= self.count {
            return None;
        }
        let angle = index as f64 * self.angle_step;
        let position = Vec3::new(
            angle.cos() * self.radius,
            self.height,
            angle.sin() * self.radius,
        );
        let dphase = (self.phase)(index);
        let motion: Motion<NodeChannel> = self
            .motion
            .iter()
            .map(|&(channel, osc)| MotionBinding::new(channel, osc.with_phase(osc.phase + dphase)))
            .collect();
        let id = format!("{}/{index}", self.id_prefix);
        let mut spec = NodeSpec::new(id, self.primitive.clone())
            .at(position)
            .with_motion(motion);
        spec.material = self.material;
        Some(spec)
    }

    pub fn iter(&self) -> RingIter<'_> {
        RingIter {
            generator: self,
            next: 0,
        }
    }
}

impl fmt::Debug for RingGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingGenerator")
            .field("id_prefix", &self.id_prefix)
            .field("count", &self.count)
            .field("radius", &self.radius)
            .field("angle_step", &self.angle_step)
            .finish_non_exhaustive()
    }
}

impl<'a> IntoIterator for &'a RingGenerator {
    type Item = NodeSpec;
    type IntoIter = RingIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over a [`RingGenerator`]'s specs.
#[derive(Clone, Debug)]
pub struct RingIter<'a> {
    generator: &'a RingGenerator,
    next: usize,
}

impl Iterator for RingIter<'_> {
    type Item = NodeSpec;

    fn next(&mut self) -> Option<NodeSpec> {
        let spec = self.generator.spec_at(self.next)?;
        self.next += 1;
        Some(spec)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.generator.count.saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for RingIter<'_> {}

#[cfg(test)]
#[path = "../../tests/unit/animation/generator.rs"]
mod tests;
