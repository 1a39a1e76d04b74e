use crate::{
    foundation::color::Color,
    foundation::core::{Vec3, validate_finite_vec3},
    foundation::error::{StageError, StageResult},
};

/// Drifting point sprites filling a cube of side `spatial_scale`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParticleField {
    pub count: u32,
    pub spatial_scale: f64,
    pub point_size: f64,
    pub drift_speed: f64,
    pub opacity: f64,
    #[serde(default = "white")]
    pub color: Color,
}

fn white() -> Color {
    Color::WHITE
}

/// Linear depth fog between `near` and `far`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DepthFog {
    pub near: f64,
    pub far: f64,
    pub color: Color,
}

/// Static backdrop behind everything else.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Background {
    Solid {
        color: Color,
    },
    /// A large flat plane at `position`, e.g. a depth haze card.
    Plane {
        color: Color,
        position: Vec3,
        scale: f64,
    },
    /// Vertical gradient from `top` to `bottom`.
    Gradient {
        top: Color,
        bottom: Color,
    },
}

/// Per-scene atmosphere. Immutable once the scene is built.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AtmosphericConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub particles: Option<ParticleField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fog: Option<DepthFog>,
    /// Painted back to front.
    #[serde(default)]
    pub backgrounds: Vec<Background>,
}

impl Default for AtmosphericConfig {
    fn default() -> Self {
        Self {
            particles: None,
            fog: None,
            backgrounds: vec![Background::Solid {
                color: Color::BLACK,
            }],
        }
    }
}

impl AtmosphericConfig {
    pub fn with_particles(mut self, field: ParticleField) -> Self {
        self.particles = Some(field);
        self
    }

    pub fn with_fog(mut self, near: f64, far: f64, color: Color) -> Self {
        self.fog = Some(DepthFog { near, far, color });
        self
    }

    pub fn with_background(mut self, bg: Background) -> Self {
        self.backgrounds.push(bg);
        self
    }

    pub fn validate(&self) -> StageResult<()> {
        if let Some(p) = &self.particles {
            for (field, v) in [
                ("spatial_scale", p.spatial_scale),
                ("point_size", p.point_size),
                ("drift_speed", p.drift_speed),
            ] {
                if !v.is_finite() || v < 0.0 {
                    return Err(StageError::validation(format!(
                        "particle field {field} must be finite and >= 0"
                    )));
                }
            }
            if !p.opacity.is_finite() || !(0.0..=1.0).contains(&p.opacity) {
                return Err(StageError::validation(
                    "particle field opacity must be in [0, 1]",
                ));
            }
        }
        if let Some(f) = &self.fog {
            if !f.near.is_finite() || !f.far.is_finite() || f.near < 0.0 {
                return Err(StageError::validation(
                    "fog distances must be finite and near >= 0",
                ));
            }
            if f.near >= f.far {
                return Err(StageError::validation(format!(
                    "fog near ({}) must be < far ({})",
                    f.near, f.far
                )));
            }
        }
        for bg in &self.backgrounds {
            if let Background::Plane {
                position, scale, ..
            } = bg
            {
                validate_finite_vec3(*position, "background plane position")?;
                if !scale.is_finite() || *scale <= 0.0 {
                    return Err(StageError::validation(
                        "background plane scale must be finite and > 0",
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/atmosphere.rs"]
mod tests;
