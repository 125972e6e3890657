//! Serde Serialization Example
//!
//! Demonstrates serializing a display configuration to JSON and reading a
//! partially specified one back.
//!
//! Run with: cargo run -p snapshot-specs --example serde_example --features serde

use snapshot_specs::{Appearance, DisplayConfiguration};

fn main() -> Result<(), serde_json::Error> {
    let config = DisplayConfiguration::iphone_8(Appearance::Light);

    // Serialize to JSON
    let json = serde_json::to_string_pretty(&config)?;
    println!("Serialized DisplayConfiguration:");
    println!("{json}");
    println!();

    // Traits may be omitted; unset traits resolve to their defaults
    let minimal = r#"{
        "size": { "width": 320, "height": 240 },
        "safe_area_insets": { "top": 0, "left": 0, "bottom": 0, "right": 0 },
        "layout_margins": { "top": 8, "left": 8, "bottom": 8, "right": 8 }
    }"#;
    let parsed: DisplayConfiguration = serde_json::from_str(minimal)?;
    println!("Parsed {}x{} surface", parsed.size.width, parsed.size.height);
    println!("Resolved traits: {:?}", parsed.traits.resolve());

    Ok(())
}
