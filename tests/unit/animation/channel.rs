use super::*;

#[test]
fn names_round_trip_through_parse() {
    for &c in NodeChannel::ALL {
        assert_eq!(c.name().parse::<NodeChannel>().unwrap(), c);
    }
    for &c in RigChannel::ALL {
        assert_eq!(c.name().parse::<RigChannel>().unwrap(), c);
    }
}

#[test]
fn unknown_channel_is_a_binding_error() {
    let err = "position.w".parse::<NodeChannel>().unwrap_err();
    assert!(matches!(err, StageError::Binding(_)));
    let msg = err.to_string();
    assert!(msg.contains("position.w"));
    assert!(msg.contains("scale.uniform"));

    // Rig-only names are not node channels.
    assert!("fov".parse::<NodeChannel>().is_err());
    assert!("opacity".parse::<RigChannel>().is_err());
}

#[test]
fn serde_uses_dotted_names() {
    let c: NodeChannel = serde_json::from_str("\"rotation.z\"").unwrap();
    assert_eq!(c, NodeChannel::RotationZ);
    assert_eq!(
        serde_json::to_string(&RigChannel::TargetY).unwrap(),
        "\"target.y\""
    );
    let err = serde_json::from_str::<NodeChannel>("\"rotation.q\"").unwrap_err();
    assert!(err.to_string().contains("unknown channel"));
}
