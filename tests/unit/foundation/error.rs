use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StageError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        StageError::binding("x")
            .to_string()
            .contains("binding error:")
    );
    assert!(StageError::clock("x").to_string().contains("clock error:"));
    assert!(
        StageError::capability("x")
            .to_string()
            .contains("capability error:")
    );
    assert!(
        StageError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StageError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: StageError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, StageError::Serde(_)));
}
