use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Color = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Color::rgb(255, 0, 0));

    let c: Color = serde_json::from_value(json!("#0000FF80")).unwrap();
    assert_eq!(c, Color::rgba(0, 0, 255, 128));
}

#[test]
fn parses_short_forms() {
    assert_eq!("#fff".parse::<Color>().unwrap(), Color::WHITE);
    assert_eq!("0008".parse::<Color>().unwrap(), Color::rgba(0, 0, 0, 0x88));
}

#[test]
fn rejects_non_hex_strings() {
    assert!("red".parse::<Color>().is_err());
    assert!("#12345".parse::<Color>().is_err());
    assert!("#gg0000".parse::<Color>().is_err());
    assert!("#ééé".parse::<Color>().is_err());
    assert!(serde_json::from_value::<Color>(json!("rgb(1,2,3)")).is_err());
}

#[test]
fn hex_round_trips_through_serde() {
    let c = Color::rgb(0xa8, 0xed, 0xea);
    assert_eq!(serde_json::to_value(c).unwrap(), json!("#a8edea"));
    assert_eq!(Color::rgba(1, 2, 3, 4).to_string(), "#01020304");
}

#[test]
fn alpha_scaling_matches_wash_suffix() {
    // An opaque color with the 0x80 wash ends up exactly as "#rrggbb80".
    let c = Color::rgb(0xfe, 0xd6, 0xe3).with_alpha_scaled(0x80);
    assert_eq!(c, Color::rgba(0xfe, 0xd6, 0xe3, 0x80));

    // Colors that already carry alpha keep it proportionally.
    let c = Color::rgba(10, 20, 30, 0x80).with_alpha_scaled(0x80);
    assert_eq!(c.a, 64);
}

#[test]
fn premul_conversion() {
    let p = Color::rgba(255, 255, 255, 128).to_rgba8_premul();
    assert_eq!(p.to_array(), [128, 128, 128, 128]);
}
