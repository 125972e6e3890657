//! Snapshot Display Configurations
//!
//! Fixed, fully specified virtual displays for deterministic snapshot
//! rendering: pixel size, safe-area insets, layout margins and a bundle of
//! environment traits (appearance, size classes, content size, ...).
//!
//! # Features
//!
//! - **no_std compatible** - Plain `Copy` values, no allocation
//! - **Device presets** - Phone and tablet profiles in [`devices`]
//! - **Explicit trait precedence** - [`Traits::merged_over`] decides which
//!   side wins, there is no ambient lookup
//! - **Serde support** - Optional serialization/deserialization for JSON configs
//!
//! # Example
//!
//! ```
//! use snapshot_specs::{Appearance, DisplayConfiguration};
//!
//! let config = DisplayConfiguration::iphone_8(Appearance::Light);
//! assert_eq!(config.size.width, 375);
//! assert_eq!(config.size.height, 667);
//! assert_eq!(config.safe_area_insets.top, 20);
//!
//! let dark = config.with_appearance(Appearance::Dark);
//! assert_eq!(dark.traits.resolve().appearance, Appearance::Dark);
//! ```
//!
//! # Custom Configurations
//!
//! ```
//! use snapshot_specs::{DisplayConfiguration, EdgeInsets, SurfaceSize, Traits, SizeClass};
//!
//! const WIDGET: DisplayConfiguration = DisplayConfiguration {
//!     size: SurfaceSize::new(320, 240),
//!     safe_area_insets: EdgeInsets::ZERO,
//!     layout_margins: EdgeInsets::all(8),
//!     traits: Traits::EMPTY.with_horizontal_size_class(SizeClass::Compact),
//! };
//! assert_eq!(WIDGET.bounds_area(), 320 * 240);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod display_configuration;
pub mod devices;
pub mod traits;

pub use display_configuration::{DisplayConfiguration, EdgeInsets, SurfaceSize};
pub use traits::{
    Appearance, ContentSizeCategory, DisplayGamut, DisplayScale, ForceTouchCapability,
    LayoutDirection, ResolvedTraits, SizeClass, Traits, UserInterfaceIdiom,
};
