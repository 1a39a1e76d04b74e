use crate::{
    foundation::color::Color,
    foundation::core::Size3,
    foundation::error::{StageError, StageResult},
    scene::lighting::LightDesc,
};

/// Blend mode the render engine should use for a material.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Standard alpha "source over destination".
    #[default]
    Normal,
    /// Additive; used for glows.
    Additive,
}

/// Surface description handed to the render engine untouched.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Material {
    pub color: Color,
    #[serde(default = "one")]
    pub opacity: f64,
    #[serde(default)]
    pub blend: BlendMode,
    #[serde(default)]
    pub wireframe: bool,
    #[serde(default)]
    pub metalness: f64,
    #[serde(default = "one")]
    pub roughness: f64,
    #[serde(default)]
    pub double_sided: bool,
    /// Unlit materials ignore scene lighting.
    #[serde(default)]
    pub unlit: bool,
}

fn one() -> f64 {
    1.0
}

impl Material {
    /// Lit, opaque surface.
    pub fn standard(color: Color) -> Self {
        Self {
            color,
            opacity: 1.0,
            blend: BlendMode::Normal,
            wireframe: false,
            metalness: 0.0,
            roughness: 1.0,
            double_sided: false,
            unlit: false,
        }
    }

    /// Unlit flat color.
    pub fn basic(color: Color) -> Self {
        Self {
            unlit: true,
            ..Self::standard(color)
        }
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn additive(mut self) -> Self {
        self.blend = BlendMode::Additive;
        self
    }

    pub fn wireframe(mut self) -> Self {
        self.wireframe = true;
        self
    }

    pub fn double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }

    pub fn metal(mut self, metalness: f64, roughness: f64) -> Self {
        self.metalness = metalness;
        self.roughness = roughness;
        self
    }

    pub fn validate(&self, owner: &str) -> StageResult<()> {
        for (field, v) in [
            ("opacity", self.opacity),
            ("metalness", self.metalness),
            ("roughness", self.roughness),
        ] {
            if !v.is_finite() || !(0.0..=1.0).contains(&v) {
                return Err(StageError::validation(format!(
                    "'{owner}' material {field} must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorX {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical text anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorY {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// Text to be shaped and drawn by the external text renderer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LabelSpec {
    pub text: String,
    pub font_size: f64,
    pub color: Color,
    #[serde(default = "one")]
    pub opacity: f64,
    #[serde(default)]
    pub anchor_x: AnchorX,
    #[serde(default)]
    pub anchor_y: AnchorY,
    #[serde(default)]
    pub letter_spacing: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
}

impl LabelSpec {
    pub fn new(text: impl Into<String>, font_size: f64, color: Color) -> Self {
        Self {
            text: text.into(),
            font_size,
            color,
            opacity: 1.0,
            anchor_x: AnchorX::Center,
            anchor_y: AnchorY::Middle,
            letter_spacing: 0.0,
            max_width: None,
        }
    }

    pub fn anchored(mut self, x: AnchorX, y: AnchorY) -> Self {
        self.anchor_x = x;
        self.anchor_y = y;
        self
    }

    pub fn spacing(mut self, letter_spacing: f64) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }

    pub fn max_width(mut self, w: f64) -> Self {
        self.max_width = Some(w);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// What a scene-graph node draws.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "params", rename_all = "snake_case")]
pub enum Primitive {
    /// Transform-only container.
    Group,
    Box {
        size: Size3,
    },
    RoundedBox {
        size: Size3,
        radius: f64,
    },
    Plane {
        width: f64,
        height: f64,
    },
    Sphere {
        radius: f64,
    },
    Cylinder {
        radius_top: f64,
        radius_bottom: f64,
        height: f64,
        segments: u32,
    },
    Capsule {
        radius: f64,
        length: f64,
    },
    Label(LabelSpec),
    Light(LightDesc),
}

impl Primitive {
    pub fn plane(width: f64, height: f64) -> Self {
        Self::Plane { width, height }
    }

    pub fn cuboid(width: f64, height: f64, depth: f64) -> Self {
        Self::Box {
            size: Size3::new(width, height, depth),
        }
    }

    /// Axis-aligned extent in local space, where one applies.
    pub fn extent(&self) -> Option<Size3> {
        match self {
            Self::Box { size } | Self::RoundedBox { size, .. } => Some(*size),
            Self::Plane { width, height } => Some(Size3::new(*width, *height, 0.0)),
            Self::Sphere { radius } => Some(Size3::new(radius * 2.0, radius * 2.0, radius * 2.0)),
            Self::Cylinder {
                radius_top,
                radius_bottom,
                height,
                ..
            } => {
                let d = radius_top.max(*radius_bottom) * 2.0;
                Some(Size3::new(d, *height, d))
            }
            Self::Capsule { radius, length } => {
                Some(Size3::new(radius * 2.0, length + radius * 2.0, radius * 2.0))
            }
            Self::Group | Self::Label(_) | Self::Light(_) => None,
        }
    }

    pub fn validate(&self, owner: &str) -> StageResult<()> {
        let positive = |field: &str, v: f64| -> StageResult<()> {
            if !v.is_finite() || v < 0.0 {
                return Err(StageError::validation(format!(
                    "'{owner}' {field} must be finite and >= 0"
                )));
            }
            Ok(())
        };
        match self {
            Self::Group => Ok(()),
            Self::Box { size } => size.validate(&format!("'{owner}' size")),
            Self::RoundedBox { size, radius } => {
                size.validate(&format!("'{owner}' size"))?;
                positive("radius", *radius)
            }
            Self::Plane { width, height } => {
                positive("width", *width)?;
                positive("height", *height)
            }
            Self::Sphere { radius } => positive("radius", *radius),
            Self::Cylinder {
                radius_top,
                radius_bottom,
                height,
                segments,
            } => {
                positive("radius_top", *radius_top)?;
                positive("radius_bottom", *radius_bottom)?;
                positive("height", *height)?;
                if *segments < 3 {
                    return Err(StageError::validation(format!(
                        "'{owner}' cylinder needs at least 3 segments"
                    )));
                }
                Ok(())
            }
            Self::Capsule { radius, length } => {
                positive("radius", *radius)?;
                positive("length", *length)
            }
            Self::Label(label) => {
                if label.text.trim().is_empty() {
                    return Err(StageError::validation(format!(
                        "'{owner}' label text must be non-empty"
                    )));
                }
                positive("font_size", label.font_size)?;
                if let Some(w) = label.max_width {
                    positive("max_width", w)?;
                }
                Ok(())
            }
            Self::Light(light) => light.validate(owner),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/primitive.rs"]
mod tests;
