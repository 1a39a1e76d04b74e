use crate::{
    animation::channel::NodeChannel,
    animation::motion::Motion,
    animation::oscillator::Oscillator,
    foundation::core::{Mat4, Transform3D, Vec3},
    foundation::error::{StageError, StageResult},
    graph::primitive::{Material, Primitive},
};

/// Evaluated local state of one node for one instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct NodeState {
    pub transform: Transform3D,
    /// Applied in the parent frame, around the parent origin, before `transform`.
    pub pivot: Transform3D,
    /// Clamped to `[0, 1]`.
    pub opacity: f64,
}

impl NodeState {
    /// `pivot * transform`.
    pub fn local_matrix(&self) -> Mat4 {
        self.pivot.to_matrix() * self.transform.to_matrix()
    }
}

/// Declarative description of a node before it joins a graph.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NodeSpec {
    pub id: String,
    #[serde(default)]
    pub base: Transform3D,
    #[serde(default = "one")]
    pub opacity: f64,
    #[serde(default)]
    pub motion: Motion<NodeChannel>,
    /// Sway around the parent origin, e.g. a hover wrapped around a positioned card.
    #[serde(default, skip_serializing_if = "Motion::is_empty")]
    pub pivot: Motion<NodeChannel>,
    pub primitive: Primitive,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<Material>,
}

fn one() -> f64 {
    1.0
}

impl NodeSpec {
    pub fn new(id: impl Into<String>, primitive: Primitive) -> Self {
        Self {
            id: id.into(),
            base: Transform3D::default(),
            opacity: 1.0,
            motion: Motion::new(),
            pivot: Motion::new(),
            primitive,
            material: None,
        }
    }

    pub fn group(id: impl Into<String>) -> Self {
        Self::new(id, Primitive::Group)
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.base.translate = position;
        self
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.base.rotation = rotation;
        self
    }

    pub fn scaled(mut self, s: f64) -> Self {
        self.base.scale = Vec3::splat(s);
        self
    }

    pub fn scaled_xyz(mut self, scale: Vec3) -> Self {
        self.base.scale = scale;
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    pub fn bind(mut self, channel: NodeChannel, oscillator: Oscillator) -> Self {
        self.motion = self.motion.with(channel, oscillator);
        self
    }

    pub fn with_motion(mut self, motion: Motion<NodeChannel>) -> Self {
        self.motion = motion;
        self
    }

    pub fn with_pivot(mut self, pivot: Motion<NodeChannel>) -> Self {
        self.pivot = pivot;
        self
    }
}

/// A scene-graph node whose transform is recomputed from its bindings.
///
/// `update` is idempotent: the cached state is a function of `elapsed` alone.
#[derive(Clone, Debug)]
pub struct AnimatedNode {
    id: String,
    base: Transform3D,
    base_opacity: f64,
    motion: Motion<NodeChannel>,
    pivot: Motion<NodeChannel>,
    cached: NodeState,
}

impl AnimatedNode {
    /// Validate base values and clamp degenerate oscillators.
    pub fn new(
        id: impl Into<String>,
        base: Transform3D,
        base_opacity: f64,
        mut motion: Motion<NodeChannel>,
    ) -> StageResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(StageError::validation("node id must be non-empty"));
        }
        if !base.is_finite() {
            return Err(StageError::validation(format!(
                "node '{id}' base transform must be finite"
            )));
        }
        if !base_opacity.is_finite() || !(0.0..=1.0).contains(&base_opacity) {
            return Err(StageError::validation(format!(
                "node '{id}' opacity must be finite and in [0, 1]"
            )));
        }
        warn_clamped(&id, &mut motion);
        let cached = NodeState {
            transform: base,
            pivot: Transform3D::default(),
            opacity: base_opacity,
        };
        Ok(Self {
            id,
            base,
            base_opacity,
            motion,
            pivot: Motion::new(),
            cached,
        })
    }

    /// Attach motion applied around the parent origin rather than the node's own.
    pub fn with_pivot(mut self, mut pivot: Motion<NodeChannel>) -> Self {
        warn_clamped(&self.id, &mut pivot);
        self.pivot = pivot;
        self
    }

    pub fn from_spec(spec: &NodeSpec) -> StageResult<Self> {
        Ok(
            Self::new(spec.id.clone(), spec.base, spec.opacity, spec.motion.clone())?
                .with_pivot(spec.pivot.clone()),
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn base(&self) -> Transform3D {
        self.base
    }

    pub fn motion(&self) -> &Motion<NodeChannel> {
        &self.motion
    }

    pub fn pivot(&self) -> &Motion<NodeChannel> {
        &self.pivot
    }

    /// Pure evaluation at `elapsed`; does not touch the cache.
    ///
    /// Scale never goes below zero and opacity stays in `[0, 1]`.
    pub fn sample(&self, elapsed: f64) -> NodeState {
        let own = Offsets::of(&self.motion, elapsed);
        let swing = Offsets::of(&self.pivot, elapsed);
        let b = self.base;
        let transform = Transform3D {
            translate: b.translate + own.translate,
            rotation: b.rotation + own.rotation,
            scale: (b.scale + Vec3::splat(own.scale)).max(Vec3::ZERO),
        };
        let pivot = Transform3D {
            translate: swing.translate,
            rotation: swing.rotation,
            scale: Vec3::splat((1.0 + swing.scale).max(0.0)),
        };
        let opacity = (self.base_opacity + own.opacity + swing.opacity).clamp(0.0, 1.0);
        NodeState {
            transform,
            pivot,
            opacity,
        }
    }

    /// Recompute and cache the local state for this frame.
    pub fn update(&mut self, elapsed: f64) -> NodeState {
        self.cached = self.sample(elapsed);
        self.cached
    }

    /// State written by the last [`AnimatedNode::update`] (base pose before the first).
    pub fn state(&self) -> NodeState {
        self.cached
    }
}

fn warn_clamped(id: &str, motion: &mut Motion<NodeChannel>) {
    let clamped = motion.sanitize();
    if !clamped.is_empty() {
        tracing::warn!(
            node = %id,
            ?clamped,
            "non-finite oscillator parameters clamped to zero motion"
        );
    }
}

/// Summed channel offsets of one motion list.
struct Offsets {
    translate: Vec3,
    rotation: Vec3,
    scale: f64,
    opacity: f64,
}

impl Offsets {
    fn of(m: &Motion<NodeChannel>, elapsed: f64) -> Self {
        use NodeChannel as C;
        if m.is_empty() {
            return Self {
                translate: Vec3::ZERO,
                rotation: Vec3::ZERO,
                scale: 0.0,
                opacity: 0.0,
            };
        }
        Self {
            translate: Vec3::new(
                m.offset(C::PositionX, elapsed),
                m.offset(C::PositionY, elapsed),
                m.offset(C::PositionZ, elapsed),
            ),
            rotation: Vec3::new(
                m.offset(C::RotationX, elapsed),
                m.offset(C::RotationY, elapsed),
                m.offset(C::RotationZ, elapsed),
            ),
            scale: m.offset(C::ScaleUniform, elapsed),
            opacity: m.offset(C::Opacity, elapsed),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/node.rs"]
mod tests;
