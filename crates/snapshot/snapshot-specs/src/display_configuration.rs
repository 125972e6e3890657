//! Display configuration types
//!
//! Describes the virtual display a view is hosted in while it is captured.

use crate::traits::{Appearance, Traits};

/// Pixel dimensions of a virtual display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct SurfaceSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl SurfaceSize {
    /// Create a size from width and height.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Insets from each edge of a rectangle, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct EdgeInsets {
    /// Inset from the top edge
    pub top: u32,
    /// Inset from the left edge
    pub left: u32,
    /// Inset from the bottom edge
    pub bottom: u32,
    /// Inset from the right edge
    pub right: u32,
}

impl EdgeInsets {
    /// No insets.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create insets in top, left, bottom, right order.
    pub const fn new(top: u32, left: u32, bottom: u32, right: u32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Same inset on every edge.
    pub const fn all(value: u32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Symmetric vertical and horizontal insets.
    pub const fn symmetric(vertical: u32, horizontal: u32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Sum of left and right insets.
    pub const fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Sum of top and bottom insets.
    pub const fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}

/// Complete description of the virtual display used for one capture.
///
/// A configuration fully determines the rendering of a given view tree:
/// the surface never consults process-wide defaults. Values are `Copy` and
/// built fresh for each call (presets are functions, not statics).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DisplayConfiguration {
    /// Surface size in pixels; captured bitmaps have exactly this size.
    pub size: SurfaceSize,

    /// Area obscured by system chrome (status bar, home indicator).
    pub safe_area_insets: EdgeInsets,

    /// Default content margins of the root view.
    pub layout_margins: EdgeInsets,

    /// Environment traits. Unset traits resolve to their defaults.
    #[cfg_attr(feature = "serde", serde(default))]
    pub traits: Traits,
}

impl DisplayConfiguration {
    /// Create a configuration with no insets and no explicit traits.
    pub const fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            safe_area_insets: EdgeInsets::ZERO,
            layout_margins: EdgeInsets::ZERO,
            traits: Traits::EMPTY,
        }
    }

    /// Replace the surface size.
    #[must_use]
    pub const fn with_size(mut self, size: SurfaceSize) -> Self {
        self.size = size;
        self
    }

    /// Replace the safe-area insets.
    #[must_use]
    pub const fn with_safe_area_insets(mut self, insets: EdgeInsets) -> Self {
        self.safe_area_insets = insets;
        self
    }

    /// Replace the layout margins.
    #[must_use]
    pub const fn with_layout_margins(mut self, margins: EdgeInsets) -> Self {
        self.layout_margins = margins;
        self
    }

    /// Overlay `traits` on the current traits; set fields of `traits` win.
    #[must_use]
    pub const fn with_traits(mut self, traits: Traits) -> Self {
        self.traits = traits.merged_over(&self.traits);
        self
    }

    /// Override the appearance (light/dark) only.
    #[must_use]
    pub const fn with_appearance(self, appearance: Appearance) -> Self {
        self.with_traits(Traits::EMPTY.with_appearance(appearance))
    }

    /// Number of pixels on the surface.
    pub const fn bounds_area(&self) -> u64 {
        (self.size.width as u64).saturating_mul(self.size.height as u64)
    }

    /// Width left for content once the layout margins are removed.
    pub const fn readable_width(&self) -> u32 {
        self.size.width.saturating_sub(self.layout_margins.horizontal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{DisplayGamut, SizeClass};

    fn test_config() -> DisplayConfiguration {
        DisplayConfiguration::new(SurfaceSize::new(320, 240))
            .with_safe_area_insets(EdgeInsets::new(20, 0, 0, 0))
            .with_layout_margins(EdgeInsets::symmetric(8, 16))
    }

    #[test]
    fn test_edge_insets_sums() {
        let insets = EdgeInsets::new(20, 16, 4, 12);
        assert_eq!(insets.horizontal(), 28);
        assert_eq!(insets.vertical(), 24);
        assert_eq!(EdgeInsets::all(3), EdgeInsets::new(3, 3, 3, 3));
    }

    #[test]
    fn test_surface_size_empty() {
        assert!(SurfaceSize::new(0, 10).is_empty());
        assert!(SurfaceSize::new(10, 0).is_empty());
        assert!(!SurfaceSize::new(1, 1).is_empty());
    }

    #[test]
    fn test_bounds_area() {
        assert_eq!(test_config().bounds_area(), 76_800);
    }

    #[test]
    fn test_readable_width() {
        assert_eq!(test_config().readable_width(), 288);
    }

    #[test]
    fn test_with_traits_overlays() {
        let base = test_config().with_traits(
            Traits::EMPTY
                .with_display_gamut(DisplayGamut::P3)
                .with_horizontal_size_class(SizeClass::Regular),
        );
        let updated =
            base.with_traits(Traits::EMPTY.with_horizontal_size_class(SizeClass::Compact));

        let resolved = updated.traits.resolve();
        assert_eq!(resolved.horizontal_size_class, SizeClass::Compact);
        // Untouched fields survive the overlay
        assert_eq!(resolved.display_gamut, DisplayGamut::P3);
    }

    #[test]
    fn test_with_appearance_only_changes_appearance() {
        let light = test_config().with_appearance(Appearance::Light);
        let dark = light.with_appearance(Appearance::Dark);
        assert_eq!(light.size, dark.size);
        assert_eq!(light.safe_area_insets, dark.safe_area_insets);
        assert_ne!(light, dark);
        assert_eq!(dark.traits.appearance, Some(Appearance::Dark));
    }
}
