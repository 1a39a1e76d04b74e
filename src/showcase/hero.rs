use std::f64::consts::FRAC_PI_4;

use crate::{
    animation::channel::{NodeChannel, RigChannel},
    animation::motion::Motion,
    animation::oscillator::Oscillator,
    camera::rig::{CameraPose, CameraRig},
    clock::frame_clock::FrameClock,
    content::panel::ScenePanelContent,
    content::style::PanelStyle,
    foundation::color::{Color, hex},
    foundation::core::{Size3, Vec3},
    foundation::error::StageResult,
    graph::node::NodeSpec,
    graph::primitive::{LabelSpec, Material, Primitive},
    scene::atmosphere::{AtmosphericConfig, ParticleField},
    scene::capability::RenderCapabilities,
    scene::composer::{SceneComposer, SceneComposition},
    scene::lighting::LightDesc,
};

/// Every hero motion repeats on this cycle.
pub const LOOP_SECS: f64 = 8.0;

/// The four floating stat cards, left column first.
pub fn hero_stats() -> Vec<ScenePanelContent> {
    let neon = hex("#db2777");
    let card = Size3::new(1.8, 0.8, 0.05);
    [
        ("goals", "850+", "Goals", -2.8, 0.8, 0.2),
        ("matches", "1200+", "Matches", -2.8, -0.4, 0.2),
        ("trophies", "35", "Trophies", 2.8, 0.8, -0.2),
        ("records", "48", "Records", 2.8, -0.4, -0.2),
    ]
    .into_iter()
    .map(|(id, value, label, x, y, angle)| {
        ScenePanelContent::new(id, value, Vec3::new(x, y, 0.0), card, neon)
            .subtitle(label)
            .rotated(Vec3::new(0.0, angle, angle))
    })
    .collect()
}

fn silhouette() -> [NodeSpec; 4] {
    let skin = Material::basic(hex("#0a0a09"))
        .opacity(0.15)
        .double_sided();
    let group = NodeSpec::group("silhouette")
        .at(Vec3::new(0.0, -0.5, -4.0))
        .scaled(3.5)
        .bind(
            NodeChannel::PositionY,
            Oscillator::sine(0.05, 1.0).looped(LOOP_SECS),
        )
        .bind(
            NodeChannel::PositionX,
            Oscillator::cosine(0.02, 0.5).looped(LOOP_SECS),
        );
    [
        group,
        NodeSpec::new("silhouette/head", Primitive::Sphere { radius: 0.3 })
            .at(Vec3::new(0.2, 1.8, 0.0))
            .material(skin),
        NodeSpec::new(
            "silhouette/torso",
            Primitive::Cylinder {
                radius_top: 0.6,
                radius_bottom: 0.4,
                height: 1.8,
                segments: 32,
            },
        )
        .at(Vec3::new(0.0, 0.8, 0.0))
        .material(skin),
        NodeSpec::new(
            "silhouette/arm",
            Primitive::Capsule {
                radius: 0.15,
                length: 0.8,
            },
        )
        .at(Vec3::new(-0.5, 1.4, 0.0))
        .rotated(Vec3::new(0.0, 0.0, FRAC_PI_4))
        .material(skin),
    ]
}

/// Opening section: the big "7", a pulsing glow, a silhouette and the stat cards.
#[tracing::instrument(skip_all)]
pub fn hero_scene(clock: FrameClock, caps: &RenderCapabilities) -> StageResult<SceneComposition> {
    let drift = Motion::new()
        .with(
            RigChannel::PositionX,
            Oscillator::sine(0.05, 1.0).looped(LOOP_SECS),
        )
        .with(
            RigChannel::PositionY,
            Oscillator::cosine(0.03, 1.0).looped(LOOP_SECS),
        );
    let rig = CameraRig::drift(CameraPose::new(Vec3::new(0.0, 0.5, 5.0), 40.0), drift)?;

    let atmosphere = AtmosphericConfig::default()
        .with_particles(ParticleField {
            count: 40,
            spatial_scale: 10.0,
            point_size: 1.0,
            drift_speed: 0.2,
            opacity: 0.3,
            color: Color::WHITE,
        })
        .with_fog(5.0, 15.0, Color::BLACK);

    let [body, head, torso, arm] = silhouette();
    let composer = SceneComposer::new("hero")
        .camera(rig)
        .atmosphere(atmosphere)
        .light(LightDesc::ambient(0.4))
        .light(LightDesc::point(Vec3::new(0.0, 5.0, 5.0), 30.0, Color::WHITE))
        .light(LightDesc::point(Vec3::new(0.0, -5.0, 5.0), 10.0, hex("#db2777")))
        .node(body)
        .child("silhouette", head)
        .child("silhouette", torso)
        .child("silhouette", arm)
        .node(NodeSpec::group("glow").at(Vec3::new(0.0, 0.5, -3.0)))
        .child(
            "glow",
            NodeSpec::new("glow/plane", Primitive::plane(15.0, 15.0))
                .scaled(1.05)
                .opacity(0.04)
                .material(Material::basic(hex("#db2777")).additive())
                .bind(NodeChannel::ScaleUniform, Oscillator::sine(0.05, 0.8))
                .bind(NodeChannel::Opacity, Oscillator::sine(0.01, 0.8)),
        )
        .child(
            "glow",
            NodeSpec::new(
                "glow/light",
                Primitive::Light(
                    LightDesc::point(Vec3::ZERO, 10.0, hex("#fb923c")).distance(20.0),
                ),
            ),
        )
        .node(
            NodeSpec::new(
                "seven",
                Primitive::Label(LabelSpec::new("7", 10.0, hex("#111")).opacity(0.8)),
            )
            .at(Vec3::new(0.0, 0.5, -4.0)),
        )
        .node(NodeSpec::group("stats").at(Vec3::new(0.0, 0.2, 0.0)))
        .panels_under("stats", &hero_stats(), &PanelStyle::stat());

    composer.build(clock, caps)
}
