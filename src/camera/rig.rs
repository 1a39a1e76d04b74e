use crate::{
    animation::channel::RigChannel,
    animation::motion::Motion,
    animation::oscillator::Oscillator,
    foundation::core::{Mat4, Vec3, validate_finite_vec3},
    foundation::error::{StageError, StageResult},
};

const MIN_FOV_DEG: f64 = 1.0;
const MAX_FOV_DEG: f64 = 179.0;

/// Resting viewpoint of a rig.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub look_at: Option<Vec3>,
    /// Vertical field of view in degrees.
    pub fov_deg: f64,
}

impl CameraPose {
    pub fn new(position: Vec3, fov_deg: f64) -> Self {
        Self {
            position,
            look_at: None,
            fov_deg,
        }
    }

    pub fn looking_at(mut self, target: Vec3) -> Self {
        self.look_at = Some(target);
        self
    }
}

/// How the rig aims. Chosen at construction; never switched at runtime.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum RigStrategy {
    /// Moves freely and re-aims at `focus` on every frame.
    Orbit { focus: Vec3 },
    /// Keeps the base framing; bindings add small perturbations.
    Drift,
}

/// Resolved camera state for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CameraView {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_deg: f64,
    /// World-to-camera matrix (right-handed).
    pub view: Mat4,
}

/// The single viewpoint controller of a scene.
#[derive(Clone, Debug)]
pub struct CameraRig {
    base: CameraPose,
    strategy: RigStrategy,
    motion: Motion<RigChannel>,
    cached: CameraView,
}

impl CameraRig {
    pub fn new(
        base: CameraPose,
        strategy: RigStrategy,
        mut motion: Motion<RigChannel>,
    ) -> StageResult<Self> {
        validate_finite_vec3(base.position, "camera position")?;
        if let Some(t) = base.look_at {
            validate_finite_vec3(t, "camera look_at")?;
        }
        if let RigStrategy::Orbit { focus } = strategy {
            validate_finite_vec3(focus, "camera orbit focus")?;
        }
        if !base.fov_deg.is_finite() || !(MIN_FOV_DEG..=MAX_FOV_DEG).contains(&base.fov_deg) {
            return Err(StageError::validation(format!(
                "camera fov_deg must be in [{MIN_FOV_DEG}, {MAX_FOV_DEG}] (got {})",
                base.fov_deg
            )));
        }
        let clamped = motion.sanitize();
        if !clamped.is_empty() {
            tracing::warn!(
                ?clamped,
                "non-finite camera oscillator parameters clamped to zero motion"
            );
        }

        let mut rig = Self {
            base,
            strategy,
            motion,
            cached: resolve_view(base.position, base.position + Vec3::NEG_Z, base.fov_deg),
        };
        rig.cached = rig.sample(0.0);
        Ok(rig)
    }

    /// Motionless camera.
    pub fn fixed(base: CameraPose) -> StageResult<Self> {
        Self::new(base, RigStrategy::Drift, Motion::new())
    }

    /// Static framing with micro-drift perturbations.
    pub fn drift(base: CameraPose, motion: Motion<RigChannel>) -> StageResult<Self> {
        Self::new(base, RigStrategy::Drift, motion)
    }

    /// Elliptical dolly: `x = rx * sin(wx * t)`, `y = ry * cos(wy * t)` around
    /// the base position, always aimed at `focus`.
    pub fn orbit(
        base: CameraPose,
        focus: Vec3,
        (radius_x, rate_x): (f64, f64),
        (radius_y, rate_y): (f64, f64),
    ) -> StageResult<Self> {
        let motion = Motion::new()
            .with(RigChannel::PositionX, Oscillator::sine(radius_x, rate_x))
            .with(RigChannel::PositionY, Oscillator::cosine(radius_y, rate_y));
        Self::new(base, RigStrategy::Orbit { focus }, motion)
    }

    pub fn base(&self) -> CameraPose {
        self.base
    }

    pub fn strategy(&self) -> RigStrategy {
        self.strategy
    }

    pub fn motion(&self) -> &Motion<RigChannel> {
        &self.motion
    }

    /// Point the rig's distance is measured from.
    pub fn focus(&self) -> Vec3 {
        match self.strategy {
            RigStrategy::Orbit { focus } => focus,
            RigStrategy::Drift => self.base.look_at.unwrap_or(self.base.position),
        }
    }

    /// Pure evaluation at `elapsed`.
    pub fn sample(&self, elapsed: f64) -> CameraView {
        use RigChannel as C;
        let m = &self.motion;
        let position = self.base.position
            + Vec3::new(
                m.offset(C::PositionX, elapsed),
                m.offset(C::PositionY, elapsed),
                m.offset(C::PositionZ, elapsed),
            );
        let target_offset = Vec3::new(
            m.offset(C::TargetX, elapsed),
            m.offset(C::TargetY, elapsed),
            m.offset(C::TargetZ, elapsed),
        );
        let aim = match (self.strategy, self.base.look_at) {
            (RigStrategy::Orbit { focus }, _) => focus,
            (RigStrategy::Drift, Some(look_at)) => look_at,
            (RigStrategy::Drift, None) => position + Vec3::NEG_Z,
        };
        let fov_deg =
            (self.base.fov_deg + m.offset(C::FieldOfView, elapsed)).clamp(MIN_FOV_DEG, MAX_FOV_DEG);
        resolve_view(position, aim + target_offset, fov_deg)
    }

    pub fn update(&mut self, elapsed: f64) -> CameraView {
        self.cached = self.sample(elapsed);
        self.cached
    }

    pub fn view(&self) -> CameraView {
        self.cached
    }

    /// `(min, max)` distance between the camera and [`CameraRig::focus`] over
    /// all time, derived from the base pose and binding envelopes.
    pub fn distance_bounds(&self) -> (f64, f64) {
        use RigChannel as C;
        let rel = self.base.position - self.focus();
        let axes = [
            (rel.x, self.motion.range(C::PositionX)),
            (rel.y, self.motion.range(C::PositionY)),
            (rel.z, self.motion.range(C::PositionZ)),
        ];
        let mut near_sq = 0.0;
        let mut far_sq = 0.0;
        for (c, (lo, hi)) in axes {
            let (a, b) = (c + lo, c + hi);
            let near = if a <= 0.0 && b >= 0.0 {
                0.0
            } else {
                a.abs().min(b.abs())
            };
            let far = a.abs().max(b.abs());
            near_sq += near * near;
            far_sq += far * far;
        }
        (f64::sqrt(near_sq), f64::sqrt(far_sq))
    }
}

fn resolve_view(position: Vec3, target: Vec3, fov_deg: f64) -> CameraView {
    let target = if (target - position).length_squared() < 1e-12 {
        position + Vec3::NEG_Z
    } else {
        target
    };
    let dir = (target - position).normalize();
    // Looking straight up or down makes +Y a degenerate up vector.
    let up = if dir.cross(Vec3::Y).length_squared() < 1e-12 {
        Vec3::NEG_Z
    } else {
        Vec3::Y
    };
    CameraView {
        position,
        target,
        up,
        fov_deg,
        view: Mat4::look_at_rh(position, target, up),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/rig.rs"]
mod tests;
