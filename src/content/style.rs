use std::f64::consts::FRAC_PI_6;

use crate::{
    animation::channel::NodeChannel,
    animation::motion::MotionBinding,
    animation::oscillator::Oscillator,
    foundation::color::{Color, hex},
    foundation::math::phase_from_id,
    graph::primitive::{AnchorX, AnchorY, Material},
};

/// How a template's motion is offset for the n-th record of a table.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "by", content = "step", rename_all = "snake_case")]
pub enum Stagger {
    /// Every record moves in lockstep.
    #[default]
    None,
    /// Adds `index * step` radians of phase.
    Phase(f64),
    /// Adds `index * step` seconds of delay.
    Delay(f64),
    /// Phase derived from the record id.
    Id,
}

/// A motion binding before it is attached to a concrete record.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MotionTemplate {
    pub channel: NodeChannel,
    pub oscillator: Oscillator,
    #[serde(default)]
    pub stagger: Stagger,
}

impl MotionTemplate {
    pub fn new(channel: NodeChannel, oscillator: Oscillator) -> Self {
        Self {
            channel,
            oscillator,
            stagger: Stagger::None,
        }
    }

    pub fn stagger(mut self, stagger: Stagger) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn instantiate(&self, index: usize, id: &str) -> MotionBinding<NodeChannel> {
        let osc = self.oscillator;
        let osc = match self.stagger {
            Stagger::None => osc,
            Stagger::Phase(step) => osc.with_phase(osc.phase + index as f64 * step),
            Stagger::Delay(step) => osc.with_offset(osc.offset_secs + index as f64 * step),
            Stagger::Id => osc.with_phase(osc.phase + phase_from_id(id)),
        };
        MotionBinding::new(self.channel, osc)
    }
}

/// Gentle hover: slow tilt on all axes plus a vertical bob.
pub fn float_motion(
    speed: f64,
    rotation_intensity: f64,
    float_intensity: f64,
) -> Vec<MotionTemplate> {
    let w = speed / 4.0;
    [
        (NodeChannel::RotationX, Oscillator::cosine(rotation_intensity / 8.0, w)),
        (NodeChannel::RotationY, Oscillator::sine(rotation_intensity / 8.0, w)),
        (NodeChannel::RotationZ, Oscillator::sine(rotation_intensity / 20.0, w)),
        (NodeChannel::PositionY, Oscillator::sine(float_intensity / 10.0, w)),
    ]
    .into_iter()
    .map(|(c, o)| MotionTemplate::new(c, o).stagger(Stagger::Id))
    .collect()
}

/// Shape of the main panel body.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum BodyShape {
    Box,
    RoundedBox { radius: f64 },
    /// Flat card; record depth is ignored for the body.
    Plane,
}

/// Where a color comes from during expansion.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tint {
    Accent,
    Fixed(Color),
}

impl Tint {
    pub fn resolve(self, accent: Color) -> Color {
        match self {
            Self::Accent => accent,
            Self::Fixed(c) => c,
        }
    }
}

/// Outline around the body.
///
/// Extent is `(w * scale + margin, h * scale + margin, d * depth_ratio)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BorderStyle {
    pub scale: f64,
    pub margin: f64,
    pub depth_ratio: f64,
    pub offset_z: f64,
    pub opacity: f64,
    pub tint: Tint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
}

/// Additive inner glow plane of size `(w - inset, h - inset)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlowStyle {
    pub inset: f64,
    pub offset_z: f64,
    pub opacity: f64,
}

/// Plain plane directly behind the body, same footprint.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BackingStyle {
    pub offset_z: f64,
    pub material: Material,
}

/// Thin diagonal light streak anchored near the lower-left corner.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StripeStyle {
    pub width: f64,
    /// Streak length as a fraction of the body width.
    pub length_ratio: f64,
    pub angle: f64,
    pub inset: (f64, f64),
    pub offset_z: f64,
    pub opacity: f64,
    #[serde(default)]
    pub motion: Vec<MotionTemplate>,
}

/// Point light hovering over the top edge, tinted with the accent.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AccentLightStyle {
    pub intensity: f64,
    pub distance: f64,
    pub offset_z: f64,
}

/// Which record field a label line shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSource {
    Title,
    Subtitle,
    Caption,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LabelLine {
    pub source: LabelSource,
    /// Vertical offset from the block origin.
    pub dy: f64,
    pub font_size: f64,
    pub tint: Tint,
    #[serde(default)]
    pub uppercase: bool,
    #[serde(default)]
    pub letter_spacing: f64,
    /// `max_width = w - inset` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width_inset: Option<f64>,
}

/// Text block anchored to the body.
///
/// The origin is `(fx * w/2 + dx, fy * h/2 + dy, z)`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LabelLayout {
    pub fx: f64,
    pub fy: f64,
    pub dx: f64,
    pub dy: f64,
    pub z: f64,
    pub anchor_x: AnchorX,
    #[serde(default)]
    pub anchor_y: AnchorY,
    pub lines: Vec<LabelLine>,
}

/// Recipe that turns one panel record into a container plus decorations.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PanelStyle {
    pub body: BodyShape,
    pub body_material: Material,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backing: Option<BackingStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glow: Option<GlowStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe: Option<StripeStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_light: Option<AccentLightStyle>,
    pub labels: LabelLayout,
    /// Bindings on the container itself.
    #[serde(default)]
    pub motion: Vec<MotionTemplate>,
    /// Bindings swung around the parent origin, outside the record's own transform.
    #[serde(default)]
    pub float: Vec<MotionTemplate>,
}

/// Gallery drift amplitude, `0.0005 * 60 / 0.4`.
const DRIFT: f64 = 0.075;

impl PanelStyle {
    /// Dark rounded glass card with a glowing rim, lit from above.
    pub fn gallery() -> Self {
        // Integral of the per-frame drift `y += 0.0005 * sin(0.4t + n)` at 60 fps,
        // anchored so every card starts at its declared height.
        let motion = vec![
            MotionTemplate::new(
                NodeChannel::PositionY,
                Oscillator::cosine(-DRIFT, 0.4).with_phase(1.0),
            )
            .stagger(Stagger::Phase(1.0)),
            MotionTemplate::new(
                NodeChannel::PositionY,
                Oscillator::cosine(DRIFT, 0.0).with_phase(1.0),
            )
            .stagger(Stagger::Phase(1.0)),
            MotionTemplate::new(
                NodeChannel::RotationZ,
                Oscillator::sine(0.01, 0.2).with_phase(1.0),
            )
            .stagger(Stagger::Phase(1.0)),
        ];
        Self {
            body: BodyShape::RoundedBox { radius: 0.1 },
            body_material: Material::standard(hex("#111"))
                .opacity(0.85)
                .metal(0.9, 0.05),
            backing: None,
            border: Some(BorderStyle {
                scale: 1.0,
                margin: 0.02,
                depth_ratio: 0.2,
                offset_z: -0.01,
                opacity: 0.2,
                tint: Tint::Accent,
                corner_radius: Some(0.1),
            }),
            glow: Some(GlowStyle {
                inset: 0.1,
                offset_z: 0.03,
                opacity: 0.05,
            }),
            stripe: None,
            accent_light: Some(AccentLightStyle {
                intensity: 2.0,
                distance: 4.0,
                offset_z: 0.5,
            }),
            labels: LabelLayout {
                fx: 0.0,
                fy: -1.0,
                dx: 0.0,
                dy: 0.8,
                z: 0.06,
                anchor_x: AnchorX::Center,
                anchor_y: AnchorY::Middle,
                lines: vec![
                    LabelLine {
                        source: LabelSource::Subtitle,
                        dy: 0.0,
                        font_size: 0.1,
                        tint: Tint::Accent,
                        uppercase: false,
                        letter_spacing: 0.4,
                        max_width_inset: None,
                    },
                    LabelLine {
                        source: LabelSource::Title,
                        dy: -0.25,
                        font_size: 0.25,
                        tint: Tint::Fixed(Color::WHITE),
                        uppercase: false,
                        letter_spacing: 0.0,
                        max_width_inset: Some(1.0),
                    },
                ],
            },
            motion,
            float: float_motion(1.5, 0.1, 0.2),
        }
    }

    /// Thin frosted stat card with a neon wireframe edge and a looping bob.
    pub fn stat() -> Self {
        const LOOP_SECS: f64 = 8.0;
        Self {
            body: BodyShape::Box,
            body_material: Material::standard(Color::WHITE)
                .opacity(0.15)
                .metal(1.0, 0.0),
            backing: None,
            border: Some(BorderStyle {
                scale: 1.01,
                margin: 0.0,
                depth_ratio: 0.2,
                offset_z: 0.01,
                opacity: 0.3,
                tint: Tint::Accent,
                corner_radius: None,
            }),
            glow: None,
            stripe: None,
            accent_light: None,
            labels: LabelLayout {
                fx: 0.0,
                fy: 0.0,
                dx: 0.0,
                dy: 0.15,
                z: 0.04,
                anchor_x: AnchorX::Center,
                anchor_y: AnchorY::Middle,
                lines: vec![
                    LabelLine {
                        source: LabelSource::Title,
                        dy: 0.0,
                        font_size: 0.24,
                        tint: Tint::Fixed(Color::WHITE),
                        uppercase: false,
                        letter_spacing: 0.0,
                        max_width_inset: None,
                    },
                    LabelLine {
                        source: LabelSource::Subtitle,
                        dy: -0.33,
                        font_size: 0.09,
                        tint: Tint::Fixed(hex("#f97316")),
                        uppercase: true,
                        letter_spacing: 0.15,
                        max_width_inset: None,
                    },
                ],
            },
            motion: vec![
                MotionTemplate::new(
                    NodeChannel::PositionY,
                    Oscillator::sine(0.12, 1.0).looped(LOOP_SECS),
                )
                .stagger(Stagger::Delay(2.0)),
                MotionTemplate::new(
                    NodeChannel::RotationZ,
                    Oscillator::sine(0.02, 0.5).looped(LOOP_SECS),
                )
                .stagger(Stagger::Delay(2.0)),
            ],
            float: Vec::new(),
        }
    }

    /// Flat timeline card: backing plane, sweeping diagonal streak, left-aligned text.
    pub fn era() -> Self {
        Self {
            body: BodyShape::Plane,
            body_material: Material::standard(hex("#111"))
                .opacity(0.8)
                .metal(0.9, 0.1),
            backing: Some(BackingStyle {
                offset_z: -0.05,
                material: Material::basic(hex("#050505")).double_sided(),
            }),
            border: Some(BorderStyle {
                scale: 1.0,
                margin: 0.05,
                depth_ratio: 0.0,
                offset_z: -0.01,
                opacity: 0.1,
                tint: Tint::Accent,
                corner_radius: None,
            }),
            glow: None,
            stripe: Some(StripeStyle {
                width: 0.05,
                length_ratio: 1.0,
                angle: FRAC_PI_6,
                inset: (0.5, 0.4),
                offset_z: 0.05,
                opacity: 0.6,
                motion: vec![MotionTemplate::new(
                    NodeChannel::PositionX,
                    Oscillator::sine(0.1, 0.5),
                )],
            }),
            accent_light: None,
            labels: LabelLayout {
                fx: -1.0,
                fy: 1.0,
                dx: 0.5,
                dy: -0.8,
                z: 0.1,
                anchor_x: AnchorX::Left,
                anchor_y: AnchorY::Middle,
                lines: vec![
                    LabelLine {
                        source: LabelSource::Subtitle,
                        dy: 0.0,
                        font_size: 0.18,
                        tint: Tint::Accent,
                        uppercase: false,
                        letter_spacing: 0.0,
                        max_width_inset: None,
                    },
                    LabelLine {
                        source: LabelSource::Title,
                        dy: -0.35,
                        font_size: 0.4,
                        tint: Tint::Fixed(Color::WHITE),
                        uppercase: false,
                        letter_spacing: 0.0,
                        max_width_inset: None,
                    },
                    LabelLine {
                        source: LabelSource::Caption,
                        dy: -0.65,
                        font_size: 0.12,
                        tint: Tint::Fixed(hex("#666")),
                        uppercase: true,
                        letter_spacing: 0.2,
                        max_width_inset: None,
                    },
                ],
            },
            motion: Vec::new(),
            float: float_motion(1.5, 0.05, 0.1),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/style.rs"]
mod tests;
