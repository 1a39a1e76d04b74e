use std::f64::consts::TAU;

use crate::{
    animation::channel::NodeChannel,
    animation::generator::{RingGenerator, linear_phase},
    animation::oscillator::Oscillator,
    camera::rig::{CameraPose, CameraRig},
    clock::frame_clock::FrameClock,
    foundation::color::{Color, hex},
    foundation::core::Vec3,
    foundation::error::StageResult,
    graph::node::NodeSpec,
    graph::primitive::{LabelSpec, Material, Primitive},
    scene::atmosphere::{AtmosphericConfig, Background},
    scene::capability::RenderCapabilities,
    scene::composer::{SceneComposer, SceneComposition},
    scene::lighting::LightDesc,
};

/// Six translucent cards around the subject, each a radian further along.
pub fn card_ring() -> RingGenerator {
    RingGenerator::new("card", 6, 4.0, Primitive::cuboid(1.0, 0.6, 0.05))
        .angle_step(1.0)
        .material(Material::standard(Color::WHITE).opacity(0.1))
        .bind(NodeChannel::PositionY, Oscillator::sine(0.5, 1.0))
        .bind(NodeChannel::RotationX, Oscillator::cosine(0.2, 0.5))
        .phase(linear_phase(1.0))
}

fn subject() -> [NodeSpec; 4] {
    [
        NodeSpec::group("subject")
            // 0.5 rad/s spin, wrapped once per turn.
            .bind(NodeChannel::RotationY, Oscillator::sawtooth(TAU, 0.5))
            .bind(NodeChannel::PositionY, Oscillator::sine(0.2, 1.0)),
        NodeSpec::new(
            "subject/body",
            Primitive::Cylinder {
                radius_top: 0.5,
                radius_bottom: 0.8,
                height: 2.0,
                segments: 6,
            },
        )
        .material(Material::standard(hex("#222")).metal(0.8, 0.2)),
        NodeSpec::new("subject/head", Primitive::Sphere { radius: 0.3 })
            .at(Vec3::new(0.0, 1.2, 0.0))
            .material(Material::standard(hex("#333"))),
        NodeSpec::new("subject/badge", Primitive::cuboid(0.2, 0.4, 0.1))
            .at(Vec3::new(0.0, 0.0, 0.5))
            .material(Material::basic(hex("#fb923c"))),
    ]
}

/// Low-cost closing section: no fog, no particles, no blending tricks.
#[tracing::instrument(skip_all)]
pub fn performance_scene(
    clock: FrameClock,
    caps: &RenderCapabilities,
) -> StageResult<SceneComposition> {
    let [group, body, head, badge] = subject();
    let caption = LabelSpec::new("PERFORMANCE MODE", 0.5, Color::WHITE).opacity(0.1);
    SceneComposer::new("core")
        .camera(CameraRig::fixed(CameraPose::new(
            Vec3::new(0.0, 2.0, 8.0),
            50.0,
        ))?)
        .atmosphere(AtmosphericConfig {
            backgrounds: vec![Background::Solid {
                color: hex("#0a0a0a"),
            }],
            ..AtmosphericConfig::default()
        })
        .light(LightDesc::ambient(0.5))
        .light(LightDesc::directional(Vec3::new(5.0, 5.0, 5.0), 1.0))
        .light(LightDesc::point(
            Vec3::new(-5.0, -5.0, -5.0),
            0.5,
            hex("#db2777"),
        ))
        .node(group)
        .child("subject", body)
        .child("subject", head)
        .child("subject", badge)
        .node(NodeSpec::group("ui"))
        .generator(&card_ring(), Some("ui"))
        .node(
            NodeSpec::new("caption", Primitive::Label(caption))
                .at(Vec3::new(0.0, -2.0, 0.0)),
        )
        .build(clock, caps)
}
