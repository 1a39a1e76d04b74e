use crate::foundation::error::{StageError, StageResult};

pub use glam::{DMat4 as Mat4, DQuat as Quat, DVec3 as Vec3, EulerRot};

/// Local transform of a scene-graph node.
///
/// Rotation is Euler XYZ in radians, applied intrinsically (X first).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform3D {
    pub translate: Vec3,
    #[serde(default)]
    pub rotation: Vec3,
    #[serde(default = "unit_scale")]
    pub scale: Vec3, // default (1,1,1)
}

fn unit_scale() -> Vec3 {
    Vec3::ONE
}

impl Default for Transform3D {
    fn default() -> Self {
        Self {
            translate: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform3D {
    pub fn at(translate: Vec3) -> Self {
        Self {
            translate,
            ..Self::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_uniform_scale(mut self, s: f64) -> Self {
        self.scale = Vec3::splat(s);
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn quat(self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    pub fn to_matrix(self) -> Mat4 {
        // Canonical order: T * R * S
        Mat4::from_scale_rotation_translation(self.scale, self.quat(), self.translate)
    }

    pub fn is_finite(self) -> bool {
        self.translate.is_finite() && self.rotation.is_finite() && self.scale.is_finite()
    }
}

/// Box extent `(width, height, depth)` in scene units.
///
/// Serialized as a `[w, h, d]` array so content tables stay compact.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Size3 {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Size3 {
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    pub fn validate(self, field: &str) -> StageResult<()> {
        for (axis, v) in [
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
        ] {
            if !v.is_finite() {
                return Err(StageError::validation(format!(
                    "{field}.{axis} must be finite"
                )));
            }
            if v < 0.0 {
                return Err(StageError::validation(format!(
                    "{field}.{axis} must be >= 0 (got {v})"
                )));
            }
        }
        Ok(())
    }

    pub fn as_vec3(self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth)
    }
}

impl From<[f64; 3]> for Size3 {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Size3> for [f64; 3] {
    fn from(s: Size3) -> Self {
        [s.width, s.height, s.depth]
    }
}

pub(crate) fn validate_finite_vec3(v: Vec3, field: &str) -> StageResult<()> {
    if !v.is_finite() {
        return Err(StageError::validation(format!(
            "{field} must have finite components"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
