// Test file — unwrap/expect/panic acceptable in test code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![cfg(feature = "serde")]

//! Loading display configurations from JSON.

use snapshot_specs::{
    Appearance, DisplayConfiguration, DisplayScale, EdgeInsets, SizeClass, SurfaceSize, Traits,
};

#[test]
fn preset_survives_json() {
    let config = DisplayConfiguration::iphone_8(Appearance::Dark);
    let json = serde_json::to_string(&config).unwrap();
    let parsed: DisplayConfiguration = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn traits_may_be_omitted() {
    let parsed: DisplayConfiguration = serde_json::from_str(
        r#"{
            "size": { "width": 320, "height": 240 },
            "safe_area_insets": { "top": 0, "left": 0, "bottom": 0, "right": 0 },
            "layout_margins": { "top": 8, "left": 8, "bottom": 8, "right": 8 }
        }"#,
    )
    .unwrap();
    assert_eq!(parsed.size, SurfaceSize::new(320, 240));
    assert_eq!(parsed.layout_margins, EdgeInsets::all(8));
    assert_eq!(parsed.traits, Traits::EMPTY);
}

#[test]
fn partial_traits_resolve_with_defaults() {
    let parsed: DisplayConfiguration = serde_json::from_str(
        r#"{
            "size": { "width": 768, "height": 1024 },
            "safe_area_insets": { "top": 20, "left": 0, "bottom": 0, "right": 0 },
            "layout_margins": { "top": 0, "left": 0, "bottom": 0, "right": 0 },
            "traits": { "appearance": "Dark", "display_scale": 3 }
        }"#,
    )
    .unwrap();
    let resolved = parsed.traits.resolve();
    assert_eq!(resolved.appearance, Appearance::Dark);
    assert_eq!(resolved.display_scale, DisplayScale::THREE);
    assert_eq!(resolved.horizontal_size_class, SizeClass::Compact);
}

#[test]
fn unknown_trait_value_is_rejected() {
    let result: Result<Traits, _> = serde_json::from_str(r#"{ "appearance": "Sepia" }"#);
    assert!(result.is_err());
}
