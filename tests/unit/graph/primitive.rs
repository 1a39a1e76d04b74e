use super::*;

#[test]
fn extent_tracks_declared_geometry() {
    assert_eq!(
        Primitive::cuboid(1.8, 0.8, 0.05).extent(),
        Some(Size3::new(1.8, 0.8, 0.05))
    );
    assert_eq!(
        Primitive::plane(5.0, 2.8).extent(),
        Some(Size3::new(5.0, 2.8, 0.0))
    );
    assert_eq!(Primitive::Group.extent(), None);
}

#[test]
fn validate_rejects_bad_geometry() {
    assert!(Primitive::plane(-1.0, 1.0).validate("p").is_err());
    assert!(Primitive::Sphere { radius: f64::NAN }.validate("s").is_err());
    assert!(
        Primitive::Cylinder {
            radius_top: 0.5,
            radius_bottom: 0.8,
            height: 2.0,
            segments: 2,
        }
        .validate("c")
        .is_err()
    );
    assert!(
        Primitive::Label(LabelSpec::new("  ", 0.2, Color::WHITE))
            .validate("l")
            .is_err()
    );
}

#[test]
fn material_validation_bounds_opacity() {
    assert!(Material::basic(Color::WHITE).opacity(0.3).validate("m").is_ok());
    let err = Material::basic(Color::WHITE)
        .opacity(1.5)
        .validate("m")
        .unwrap_err();
    assert!(err.to_string().contains("opacity"));
}

#[test]
fn primitive_serializes_with_kind_tag() {
    let v = serde_json::to_value(Primitive::plane(1.0, 2.0)).unwrap();
    assert_eq!(v["kind"], "plane");
    assert_eq!(v["params"]["height"], 2.0);
}
