use super::*;
use crate::foundation::core::{DisplayMode, Rgba8};
use crate::style::config::StyleConfig;

#[test]
fn default_config_builds_a_registry() {
    let set = StyleSet::from_config(&StyleConfig::default()).unwrap();
    assert_eq!(set.background(), Rgba8::from_array([12, 12, 14, 255]));
}

#[test]
fn lookup_is_keyed_by_kind_and_mode() {
    let set = StyleSet::from_config(&StyleConfig::default()).unwrap();
    let interactive = set.hand(HandKind::Hour, DisplayMode::Interactive);
    let ambient = set.hand(HandKind::Hour, DisplayMode::Ambient);
    assert_ne!(interactive.color, ambient.color);
    assert!(interactive.stroke_width > ambient.stroke_width);

    // The mapping is total: every kind resolves in both modes.
    for kind in [
        HandKind::Hour,
        HandKind::Minute,
        HandKind::Second,
        HandKind::Marker,
    ] {
        for mode in [DisplayMode::Interactive, DisplayMode::Ambient] {
            let style = set.hand(kind, mode);
            assert!(style.stroke_width.is_finite());
        }
    }
}

#[test]
fn effective_forces_anti_alias_off_without_mutating_base() {
    let set = StyleSet::from_config(&StyleConfig::default()).unwrap();
    assert!(set.hand(HandKind::Minute, DisplayMode::Ambient).anti_alias);

    let forced = set.effective(HandKind::Minute, DisplayMode::Ambient, true);
    assert!(!forced.anti_alias);

    // The registry entry is untouched.
    assert!(set.hand(HandKind::Minute, DisplayMode::Ambient).anti_alias);

    let normal = set.effective(HandKind::Minute, DisplayMode::Ambient, false);
    assert!(normal.anti_alias);
}

#[test]
fn rejects_non_finite_and_negative_widths() {
    let mut cfg = StyleConfig::default();
    cfg.interactive.second.stroke_width = f64::NAN;
    assert!(StyleSet::from_config(&cfg).is_err());

    let mut cfg = StyleConfig::default();
    cfg.ambient.hour.stroke_width = -1.0;
    assert!(StyleSet::from_config(&cfg).is_err());
}
