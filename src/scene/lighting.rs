use crate::{
    foundation::color::Color,
    foundation::core::{Vec3, validate_finite_vec3},
    foundation::error::{StageError, StageResult},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightKind {
    Ambient,
    Point,
    Directional,
    Spot,
}

/// Light handed to the render engine.
///
/// When attached to a scene-graph node, `position` is local to that node and
/// is replaced by the resolved world position in each frame snapshot.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LightDesc {
    pub kind: LightKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec3>,
    #[serde(default = "white")]
    pub color: Color,
    pub intensity: f64,
    /// Falloff distance; `None` means unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Cone half-angle in radians (spot only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    /// Edge softness in `[0, 1]` (spot only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penumbra: Option<f64>,
}

fn white() -> Color {
    Color::WHITE
}

impl LightDesc {
    pub fn ambient(intensity: f64) -> Self {
        Self {
            kind: LightKind::Ambient,
            position: None,
            color: Color::WHITE,
            intensity,
            distance: None,
            angle: None,
            penumbra: None,
        }
    }

    pub fn point(position: Vec3, intensity: f64, color: Color) -> Self {
        Self {
            kind: LightKind::Point,
            position: Some(position),
            color,
            ..Self::ambient(intensity)
        }
    }

    pub fn directional(position: Vec3, intensity: f64) -> Self {
        Self {
            kind: LightKind::Directional,
            position: Some(position),
            ..Self::ambient(intensity)
        }
    }

    pub fn spot(position: Vec3, intensity: f64, angle: f64, penumbra: f64) -> Self {
        Self {
            kind: LightKind::Spot,
            position: Some(position),
            angle: Some(angle),
            penumbra: Some(penumbra),
            ..Self::ambient(intensity)
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn validate(&self, owner: &str) -> StageResult<()> {
        if !self.intensity.is_finite() || self.intensity < 0.0 {
            return Err(StageError::validation(format!(
                "light '{owner}' intensity must be finite and >= 0"
            )));
        }
        match (self.kind, self.position) {
            (LightKind::Ambient, _) => {}
            (_, Some(p)) => validate_finite_vec3(p, &format!("light '{owner}' position"))?,
            (kind, None) => {
                return Err(StageError::validation(format!(
                    "light '{owner}' of kind {kind:?} requires a position"
                )));
            }
        }
        if let Some(d) = self.distance {
            if !d.is_finite() || d <= 0.0 {
                return Err(StageError::validation(format!(
                    "light '{owner}' distance must be finite and > 0"
                )));
            }
        }
        if self.kind == LightKind::Spot {
            let angle = self.angle.unwrap_or(std::f64::consts::FRAC_PI_3);
            if !angle.is_finite() || angle <= 0.0 || angle > std::f64::consts::FRAC_PI_2 {
                return Err(StageError::validation(format!(
                    "light '{owner}' spot angle must be in (0, PI/2]"
                )));
            }
            let penumbra = self.penumbra.unwrap_or(0.0);
            if !penumbra.is_finite() || !(0.0..=1.0).contains(&penumbra) {
                return Err(StageError::validation(format!(
                    "light '{owner}' penumbra must be in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/lighting.rs"]
mod tests;
