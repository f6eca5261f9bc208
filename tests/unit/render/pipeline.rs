use super::*;
use crate::settings::presets::find_preset;

#[test]
fn no_image_stops_after_background() {
    let s = find_preset("glassmorphism")
        .unwrap()
        .apply(&StyleSettings::default());
    assert_eq!(plan(&s, false), vec![Step::Clear, Step::Background]);
}

#[test]
fn defaults_have_shadow_but_no_backdrop() {
    assert_eq!(
        plan(&StyleSettings::default(), true),
        vec![Step::Clear, Step::Background, Step::DropShadow, Step::Image]
    );
}

#[test]
fn every_stage_enabled_keeps_declared_order() {
    let s = StyleSettings {
        blur_background: true,
        shadow_intensity: 40.0,
        ..StyleSettings::default()
    };
    assert_eq!(plan(&s, true), Step::ORDER.to_vec());
}

#[test]
fn skipping_stages_preserves_relative_order() {
    let s = StyleSettings {
        blur_background: false,
        shadow_intensity: 0.0,
        ..StyleSettings::default()
    };
    assert_eq!(
        plan(&s, true),
        vec![Step::Clear, Step::Background, Step::Image]
    );

    let s = StyleSettings {
        blur_background: true,
        shadow_intensity: 0.0,
        ..StyleSettings::default()
    };
    let p = plan(&s, true);
    assert!(p.windows(2).all(|w| w[0] < w[1]));
    assert!(!p.contains(&Step::DropShadow));
}

#[test]
fn names_are_unique() {
    let mut names: Vec<_> = Step::ORDER.iter().map(|s| s.name()).collect();
    names.dedup();
    assert_eq!(names.len(), Step::ORDER.len());
}
