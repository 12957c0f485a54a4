use super::*;
use crate::foundation::core::DisplayMode;
use crate::style::registry::{HandKind, StyleSet};

#[test]
fn default_face_config_is_valid() {
    let cfg = FaceConfig::default();
    assert!(StyleSet::from_config(&cfg.style).is_ok());
    assert_eq!(cfg.ornaments.medium_gear, OrnamentSource::Generated);
    assert_eq!(cfg.ornaments.big_gear, OrnamentSource::Generated);
}

#[test]
fn json_roundtrip() {
    let cfg = FaceConfig::default();
    let json = serde_json::to_string_pretty(&cfg).unwrap();
    let de = FaceConfig::from_json_str(&json).unwrap();
    assert_eq!(de.style.background_rgba8, cfg.style.background_rgba8);
    assert_eq!(de.ornaments.gear_rgba8, cfg.ornaments.gear_rgba8);
}

#[test]
fn partial_json_uses_defaults() {
    let cfg = FaceConfig::from_json_str("{}").unwrap();
    assert_eq!(
        cfg.style.background_rgba8,
        FaceConfig::default().style.background_rgba8
    );

    // Hand entries omit anti_alias/cap and pick up the serde defaults.
    let cfg = FaceConfig::from_json_str(
        r#"{
            "ornaments": {
                "medium_gear": { "file": { "path": "gears/medium.png" } }
            }
        }"#,
    )
    .unwrap();
    assert_eq!(
        cfg.ornaments.medium_gear,
        OrnamentSource::File {
            path: "gears/medium.png".to_string()
        }
    );
    assert_eq!(cfg.ornaments.big_gear, OrnamentSource::Generated);
}

#[test]
fn invalid_json_is_a_validation_error() {
    let err = FaceConfig::from_json_str("{ nope").unwrap_err();
    assert!(err.to_string().contains("validation error:"));
}

#[test]
fn hand_lookup_matches_tables() {
    let cfg = StyleConfig::default();
    assert_eq!(
        cfg.hand(HandKind::Second, DisplayMode::Interactive).color_rgba8,
        cfg.interactive.second.color_rgba8
    );
    assert_eq!(
        cfg.hand(HandKind::Marker, DisplayMode::Ambient).color_rgba8,
        cfg.ambient.marker.color_rgba8
    );
}
