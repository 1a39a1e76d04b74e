use std::rc::Rc;

use crate::camera::rig::{CameraPose, CameraRig};
use crate::clock::frame_clock::{FrameClock, ManualClock};
use crate::foundation::color::hex;
use crate::graph::node::NodeSpec;
use crate::graph::primitive::LabelSpec;
use crate::scene::capability::RenderCapabilities;
use crate::scene::composer::{SceneComposer, SceneComposition};

use super::*;

fn scene() -> SceneComposition {
    let rig = CameraRig::fixed(CameraPose::new(Vec3::new(0.0, 0.5, 5.0), 40.0)).unwrap();
    let clock = FrameClock::mount(Rc::new(ManualClock::new(0.0))).unwrap();
    SceneComposer::new("hero")
        .camera(rig)
        .light(LightDesc::ambient(0.4))
        .node(
            NodeSpec::group("big")
                .at(Vec3::new(0.0, 1.0, 0.0))
                .scaled(2.0)
                .opacity(0.5),
        )
        .child(
            "big",
            NodeSpec::new(
                "big/seven",
                Primitive::Label(LabelSpec::new("7", 1.5, hex("#111")).opacity(0.8)),
            )
            .at(Vec3::new(1.0, 0.0, 0.0)),
        )
        .child(
            "big",
            NodeSpec::new(
                "big/light",
                Primitive::Light(LightDesc::point(Vec3::ZERO, 10.0, hex("#fb923c"))),
            )
            .at(Vec3::new(0.0, 0.0, 1.0)),
        )
        .build(clock, &RenderCapabilities::full())
        .unwrap()
}

#[test]
fn nodes_keep_parent_before_child_order() {
    let mut s = scene();
    let f = s.tick(0.0);
    let ids: Vec<&str> = f.nodes.iter().map(|n| n.id).collect();
    assert_eq!(ids, ["big", "big/seven", "big/light"]);
    assert_eq!(f.nodes[1].parent, Some(0));
    assert_eq!(f.nodes[0].parent, None);
}

#[test]
fn attached_lights_report_world_positions() {
    let mut s = scene();
    let f = s.tick(0.0);
    assert_eq!(f.lights.len(), 2);
    assert_eq!(f.lights[0].kind, crate::scene::lighting::LightKind::Ambient);
    let p = f.lights[1].position.unwrap();
    assert!((p - Vec3::new(0.0, 1.0, 2.0)).length() < 1e-12);
}

#[test]
fn labels_carry_world_anchor_scaled_size_and_opacity() {
    let mut s = scene();
    let f = s.tick(0.0);
    let l = f.label("big/seven").unwrap();
    assert_eq!(l.text, "7");
    assert!((l.anchor - Vec3::new(2.0, 1.0, 0.0)).length() < 1e-12);
    assert!((l.font_size - 3.0).abs() < 1e-12);
    assert!((l.opacity - 0.4).abs() < 1e-12);
    assert_eq!(l.color, hex("#111"));
}

#[test]
fn frame_serializes() {
    let mut s = scene();
    let json = serde_json::to_value(s.tick(1.0)).unwrap();
    assert_eq!(json["scene"], "hero");
    assert_eq!(json["nodes"].as_array().unwrap().len(), 3);
    assert!(json["camera"]["fov_deg"].is_number());
}
