use super::*;
use serde_json::json;

#[test]
fn parses_short_long_and_alpha_hex() {
    let c: Color = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Color::rgba(1.0, 0.0, 0.0, 1.0));

    let c: Color = serde_json::from_value(json!("#fff")).unwrap();
    assert_eq!(c, Color::WHITE);

    let c: Color = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert!((c.b - 1.0).abs() < 1e-9);
    assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);
}

#[test]
fn parses_rgba_object_and_array() {
    let c: Color = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 1.0));

    let c: Color = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 0.9));
}

#[test]
fn rejects_malformed_hex() {
    assert!(Color::hex("#12345").is_err());
    assert!(Color::hex("#zzzzzz").is_err());
    assert!(serde_json::from_value::<Color>(json!([1.0, 0.0])).is_err());
}

#[test]
fn clamped_drops_non_finite_channels() {
    let c = Color::rgba(2.0, f64::NAN, -1.0, 0.5).clamped();
    assert_eq!(c, Color::rgba(1.0, 0.0, 0.0, 0.5));
}
