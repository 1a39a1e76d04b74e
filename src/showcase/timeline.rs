use std::f64::consts::TAU;

use crate::{
    animation::channel::NodeChannel,
    animation::oscillator::Oscillator,
    camera::rig::{CameraPose, CameraRig},
    clock::frame_clock::FrameClock,
    content::panel::ScenePanelContent,
    content::style::PanelStyle,
    foundation::color::{Color, hex},
    foundation::core::{Size3, Vec3},
    foundation::error::StageResult,
    graph::node::NodeSpec,
    scene::atmosphere::{AtmosphericConfig, ParticleField},
    scene::capability::RenderCapabilities,
    scene::composer::{SceneComposer, SceneComposition},
    scene::lighting::LightDesc,
};

/// Distance between consecutive eras along the scroll axis.
pub const ERA_SPACING: Vec3 = Vec3::new(0.0, -3.0, -6.0);

/// Scroll speed in eras per second.
pub const SCROLL_RATE: f64 = 0.15;

pub fn timeline_eras() -> Vec<ScenePanelContent> {
    [
        ("rise", "2003-2009", "THE RISE", "Manchester", "#ef4444"),
        ("zenith", "2009-2018", "THE ZENITH", "Madrid", "#ffffff"),
        ("journey", "2018-2021", "THE JOURNEY", "Turin", "#ffffff"),
        ("legacy", "2021-PRESENT", "THE LEGACY", "Riyadh", "#fb923c"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (id, years, title, city, color))| {
        ScenePanelContent::new(
            id,
            title,
            ERA_SPACING * i as f64,
            Size3::new(5.0, 2.8, 0.0),
            hex(color),
        )
        .subtitle(years)
        .caption(city)
    })
    .collect()
}

/// Eras receding into fog while the whole track slides toward the camera,
/// wrapping after the last one.
#[tracing::instrument(skip_all)]
pub fn timeline_scene(
    clock: FrameClock,
    caps: &RenderCapabilities,
) -> StageResult<SceneComposition> {
    let eras = timeline_eras();
    let span = eras.len() as f64;
    // One full sweep of the track every `span / SCROLL_RATE` seconds.
    let rate = TAU * SCROLL_RATE / span;
    let track = NodeSpec::group("track")
        .bind(
            NodeChannel::PositionZ,
            Oscillator::sawtooth(-ERA_SPACING.z * span, rate),
        )
        .bind(
            NodeChannel::PositionY,
            Oscillator::sawtooth(ERA_SPACING.y / 6.0 * span, rate),
        );

    let atmosphere = AtmosphericConfig::default()
        .with_particles(ParticleField {
            count: 40,
            spatial_scale: 20.0,
            point_size: 1.0,
            drift_speed: 0.1,
            opacity: 0.1,
            color: Color::WHITE,
        })
        .with_fog(5.0, 25.0, Color::BLACK);

    SceneComposer::new("timeline")
        .camera(CameraRig::fixed(CameraPose::new(
            Vec3::new(0.0, 0.0, 10.0),
            35.0,
        ))?)
        .atmosphere(atmosphere)
        .light(LightDesc::ambient(0.4))
        .light(LightDesc::point(
            Vec3::new(10.0, 10.0, 10.0),
            50.0,
            Color::WHITE,
        ))
        .node(track)
        .panels_under("track", &eras, &PanelStyle::era())
        .build(clock, caps)
}
