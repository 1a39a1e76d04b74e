use super::*;
use crate::animation::channel::NodeChannel;
use crate::foundation::color::hex;
use crate::graph::node::AnimatedNode;

fn card(size: Size3) -> ScenePanelContent {
    ScenePanelContent::new("3", "DOMINANCE", Vec3::new(0.0, 0.0, 2.0), size, hex("#db2777"))
        .subtitle("2014")
}

fn extent(spec: &NodeSpec) -> Size3 {
    spec.primitive.extent().unwrap()
}

#[test]
fn negative_size_is_rejected_with_field_name() {
    let bad = card(Size3::new(4.0, -1.0, 0.05));
    let err = PanelStyle::gallery().expand(&bad, 0).unwrap_err();
    assert!(matches!(err, StageError::Validation(_)));
    let msg = err.to_string();
    assert!(msg.contains("panel '3' size.height"), "{msg}");
    assert!(msg.contains(">= 0"), "{msg}");
}

#[test]
fn record_id_becomes_container_id() {
    let e = PanelStyle::gallery()
        .expand(&card(Size3::new(4.0, 5.0, 0.05)), 2)
        .unwrap();
    assert_eq!(e.container.id, "3");
    assert_eq!(e.container.base.translate, Vec3::new(0.0, 0.0, 2.0));
    let ids: Vec<&str> = e.children.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(
        ids,
        ["3/body", "3/border", "3/glow", "3/label/0", "3/label/1", "3/light"]
    );
}

#[test]
fn derived_children_track_size() {
    let style = PanelStyle::gallery();
    for (w, h, d) in [(4.0, 5.0, 0.05), (6.0, 3.0, 0.2), (1.0, 1.0, 0.0)] {
        let e = style.expand(&card(Size3::new(w, h, d)), 0).unwrap();

        let body = extent(e.child("body").unwrap());
        assert_eq!(body, Size3::new(w, h, d));

        let border = extent(e.child("border").unwrap());
        assert!((border.width - (w + 0.02)).abs() < 1e-12);
        assert!((border.height - (h + 0.02)).abs() < 1e-12);
        assert!((border.depth - d * 0.2).abs() < 1e-12);

        let glow = extent(e.child("glow").unwrap());
        assert!((glow.width - (w - 0.1).max(0.0)).abs() < 1e-12);
        assert!((glow.height - (h - 0.1).max(0.0)).abs() < 1e-12);

        let light = e.child("light").unwrap();
        assert!((light.base.translate.y - h / 2.0).abs() < 1e-12);

        let year = e.child("label/0").unwrap();
        assert!((year.base.translate.y - (-h / 2.0 + 0.8)).abs() < 1e-12);
        let Primitive::Label(title) = &e.child("label/1").unwrap().primitive else {
            panic!("title is not a label");
        };
        assert_eq!(title.max_width, Some((w - 1.0).max(0.0)));
    }
}

#[test]
fn accent_color_reaches_every_tinted_child() {
    let accent = hex("#db2777");
    let e = PanelStyle::gallery()
        .expand(&card(Size3::new(4.0, 5.0, 0.05)), 0)
        .unwrap();
    assert_eq!(e.child("border").unwrap().material.unwrap().color, accent);
    assert_eq!(e.child("glow").unwrap().material.unwrap().color, accent);
    let Primitive::Light(light) = &e.child("light").unwrap().primitive else {
        panic!("light child is not a light");
    };
    assert_eq!(light.color, accent);
    let Primitive::Label(year) = &e.child("label/0").unwrap().primitive else {
        panic!("year is not a label");
    };
    assert_eq!(year.color, accent);
    assert_eq!(year.text, "2014");
}

#[test]
fn glow_is_additive_and_border_is_wireframe() {
    let e = PanelStyle::gallery()
        .expand(&card(Size3::new(4.0, 5.0, 0.05)), 0)
        .unwrap();
    let glow = e.child("glow").unwrap().material.unwrap();
    assert_eq!(glow.blend, crate::graph::primitive::BlendMode::Additive);
    assert!(e.child("border").unwrap().material.unwrap().wireframe);
}

#[test]
fn featured_flag_does_not_change_expansion() {
    let style = PanelStyle::gallery();
    let plain = style.expand(&card(Size3::new(4.0, 5.0, 0.05)), 0).unwrap();
    let headline = style
        .expand(&card(Size3::new(4.0, 5.0, 0.05)).featured(), 0)
        .unwrap();
    assert_eq!(plain, headline);
    let border = plain.child("border").unwrap().material.unwrap();
    assert_eq!(border.opacity, 0.2);
}

#[test]
fn float_rides_outside_the_record_transform() {
    let e = PanelStyle::gallery()
        .expand(&card(Size3::new(4.0, 5.0, 0.05)), 0)
        .unwrap();
    let channels: Vec<_> = e
        .container
        .pivot
        .bindings()
        .iter()
        .map(|b| b.channel)
        .collect();
    assert!(channels.contains(&NodeChannel::RotationX));
    assert!(channels.contains(&NodeChannel::RotationY));
    assert!(
        e.container
            .motion
            .bindings()
            .iter()
            .all(|b| b.channel != NodeChannel::RotationX)
    );
    for c in &e.children {
        assert!(c.pivot.is_empty(), "{}", c.id);
    }
}

#[test]
fn gallery_drift_starts_at_declared_height() {
    let style = PanelStyle::gallery();
    for index in 0..5 {
        let e = style.expand(&card(Size3::new(4.0, 5.0, 0.05)), index).unwrap();
        let node = AnimatedNode::from_spec(&e.container).unwrap();
        let y = node.sample(0.0).transform.translate.y;
        assert!(y.abs() < 1e-12, "index {index}: {y}");
        assert!(node.sample(3.0).transform.translate.y.abs() > 1e-6);
    }
}

#[test]
fn empty_label_lines_are_skipped_and_uppercased_when_asked() {
    let era = ScenePanelContent::new(
        "rise",
        "THE RISE",
        Vec3::ZERO,
        Size3::new(5.0, 2.8, 0.0),
        hex("#ef4444"),
    )
    .subtitle("2003 - 2009");
    let e = PanelStyle::era().expand(&era, 0).unwrap();
    assert!(e.child("label/2").is_none());

    let e = PanelStyle::era()
        .expand(&era.clone().caption("Manchester"), 0)
        .unwrap();
    let Primitive::Label(city) = &e.child("label/2").unwrap().primitive else {
        panic!("caption is not a label");
    };
    assert_eq!(city.text, "MANCHESTER");
    assert!(e.child("backing").is_some());
    assert!(e.child("stripe").is_some());
}

#[test]
fn slash_in_id_is_rejected() {
    let mut bad = card(Size3::new(1.0, 1.0, 0.1));
    bad.id = "a/b".into();
    assert!(bad.validate().is_err());
}

#[test]
fn json_tables_parse_and_validate() {
    let json = r##"[
        {"id": "1", "title": "THE BEGINNING", "subtitle": "2002",
         "position": [-6, 0, -2], "rotation": [0, 0.3, 0],
         "size": [3, 4, 0.05], "accent_color": "#ef4444"},
        {"id": "2", "title": "ASCENSION", "position": [-3, 1, 0],
         "size": [3.5, 4.5, 0.05], "accent_color": [1, 1, 1], "featured": true}
    ]"##;
    let panels = panels_from_json(json).unwrap();
    assert_eq!(panels.len(), 2);
    assert_eq!(panels[0].size, Size3::new(3.0, 4.0, 0.05));
    assert_eq!(panels[1].subtitle, "");
    assert!(panels[1].featured);

    let missing = r#"[{"id": "1", "title": "x", "position": [0, 0, 0]}]"#;
    assert!(matches!(
        panels_from_json(missing).unwrap_err(),
        StageError::Serde(_)
    ));

    let negative = r##"[{"id": "1", "title": "x", "position": [0, 0, 0],
        "size": [1, 1, -0.1], "accent_color": "#fff"}]"##;
    assert!(matches!(
        panels_from_json(negative).unwrap_err(),
        StageError::Validation(_)
    ));
}
