use super::*;
use serde_json::json;

#[test]
fn defaults_match_settings_panel() {
    let s = StyleSettings::default();
    assert_eq!(s.padding, 48.0);
    assert_eq!(s.border_radius, 16.0);
    assert_eq!(s.shadow_intensity, 30.0);
    assert_eq!(s.background_color, Color::WHITE);
    assert_eq!(s.gradient_start.to_hex(), "#667eea");
    assert_eq!(s.gradient_end.to_hex(), "#764ba2");
    assert!(!s.use_gradient);
    assert!(!s.blur_background);
    assert_eq!(s.aspect_ratio, AspectRatio::Auto);
    s.validate().unwrap();
}

#[test]
fn patch_overwrites_only_present_fields() {
    let base = StyleSettings {
        aspect_ratio: AspectRatio::Square,
        ..StyleSettings::default()
    };
    let patch = SettingsPatch {
        padding: Some(64.0),
        use_gradient: Some(true),
        ..SettingsPatch::default()
    };
    let next = base.with_patch(&patch);

    assert_eq!(next.padding, 64.0);
    assert!(next.use_gradient);
    assert_eq!(next.aspect_ratio, AspectRatio::Square);
    assert_eq!(next.border_radius, base.border_radius);
    // The original value is untouched.
    assert_eq!(base.padding, 48.0);
    assert!(!base.use_gradient);
}

#[test]
fn empty_patch_is_identity() {
    let base = StyleSettings::default();
    assert!(SettingsPatch::default().is_empty());
    assert_eq!(base.with_patch(&SettingsPatch::default()), base);
}

#[test]
fn merged_prefers_later_layer() {
    let a = SettingsPatch {
        padding: Some(10.0),
        border_radius: Some(4.0),
        ..SettingsPatch::default()
    };
    let b = SettingsPatch {
        padding: Some(20.0),
        ..SettingsPatch::default()
    };
    let m = a.merged(&b);
    assert_eq!(m.padding, Some(20.0));
    assert_eq!(m.border_radius, Some(4.0));
}

#[test]
fn validate_rejects_bad_numbers() {
    let bad = [
        SettingsPatch {
            padding: Some(-1.0),
            ..SettingsPatch::default()
        },
        SettingsPatch {
            border_radius: Some(f64::INFINITY),
            ..SettingsPatch::default()
        },
        SettingsPatch {
            shadow_intensity: Some(101.0),
            ..SettingsPatch::default()
        },
    ];
    for patch in bad {
        let s = StyleSettings::default().with_patch(&patch);
        assert!(s.validate().is_err(), "{patch:?}");
    }
}

#[test]
fn json_uses_camel_case_names() {
    let v = serde_json::to_value(StyleSettings::default()).unwrap();
    assert_eq!(v["backgroundColor"], json!("#ffffff"));
    assert_eq!(v["aspectRatio"], json!("auto"));
    assert_eq!(v["shadowIntensity"], json!(30.0));

    let back: StyleSettings = serde_json::from_value(v).unwrap();
    assert_eq!(back, StyleSettings::default());
}

#[test]
fn patch_json_applies_and_validates() {
    let base = StyleSettings::default();
    let next = base
        .with_patch_json(r##"{"padding": 64, "gradientStart": "#a8edea", "aspectRatio": "1:1"}"##)
        .unwrap();
    assert_eq!(next.padding, 64.0);
    assert_eq!(next.gradient_start, Color::rgb(0xa8, 0xed, 0xea));
    assert_eq!(next.aspect_ratio, AspectRatio::Square);

    assert!(base.with_patch_json(r#"{"padding": -4}"#).is_err());
    assert!(base.with_patch_json(r#"{"backgroundColor": "teal"}"#).is_err());
    assert!(base.with_patch_json(r#"{"shadow": 3}"#).is_err());
}
