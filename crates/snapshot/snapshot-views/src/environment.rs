//! Environment values shared by every view during one capture.
//!
//! An [`Environment`] is derived from a [`DisplayConfiguration`] and is the
//! only source of layout context: bounds, insets, resolved traits and the
//! color palette. Nothing is read from process-wide state.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use snapshot_specs::{
    Appearance, DisplayConfiguration, DisplayGamut, EdgeInsets, ResolvedTraits,
};

/// Semantic colors for one appearance and gamut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Window background
    pub background: Rgb888,
    /// Background of presented cards (sheets)
    pub elevated_background: Rgb888,
    /// Primary text
    pub label: Rgb888,
    /// Secondary text
    pub secondary_label: Rgb888,
    /// Tint color
    pub accent: Rgb888,
    /// Color of the scrim behind a presentation
    pub dimming: Rgb888,
    /// Scrim opacity, 0 (clear) to 255 (opaque)
    pub dimming_opacity: u8,
}

impl Palette {
    /// Light appearance.
    pub const LIGHT: Self = Self {
        background: Rgb888::new(255, 255, 255),
        elevated_background: Rgb888::new(255, 255, 255),
        label: Rgb888::new(0, 0, 0),
        secondary_label: Rgb888::new(138, 138, 142),
        accent: Rgb888::new(0, 122, 255),
        dimming: Rgb888::new(0, 0, 0),
        dimming_opacity: 102,
    };

    /// Dark appearance.
    pub const DARK: Self = Self {
        background: Rgb888::new(0, 0, 0),
        elevated_background: Rgb888::new(28, 28, 30),
        label: Rgb888::new(255, 255, 255),
        secondary_label: Rgb888::new(142, 142, 147),
        accent: Rgb888::new(10, 132, 255),
        dimming: Rgb888::new(0, 0, 0),
        dimming_opacity: 122,
    };

    /// Palette for an appearance rendered into a gamut.
    ///
    /// Wide-gamut displays get a slightly different accent so P3 captures
    /// are distinguishable from sRGB ones.
    pub const fn for_traits(appearance: Appearance, gamut: DisplayGamut) -> Self {
        let mut palette = match appearance {
            Appearance::Light => Self::LIGHT,
            Appearance::Dark => Self::DARK,
        };
        if let DisplayGamut::P3 = gamut {
            palette.accent = match appearance {
                Appearance::Light => Rgb888::new(0, 117, 255),
                Appearance::Dark => Rgb888::new(16, 136, 255),
            };
        }
        palette
    }

    /// Resolve a semantic role to a color.
    pub const fn color(&self, role: ColorRole) -> Rgb888 {
        match role {
            ColorRole::Label => self.label,
            ColorRole::SecondaryLabel => self.secondary_label,
            ColorRole::Accent => self.accent,
        }
    }
}

/// Semantic text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorRole {
    /// Primary text
    #[default]
    Label,
    /// De-emphasized text
    SecondaryLabel,
    /// Tinted text
    Accent,
}

/// Layout context for one capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Environment {
    /// Full surface bounds, origin at zero
    pub bounds: Rectangle,
    /// Area obscured by system chrome
    pub safe_area: EdgeInsets,
    /// Default content margins
    pub layout_margins: EdgeInsets,
    /// Traits with every field resolved
    pub traits: ResolvedTraits,
    /// Colors for the resolved appearance and gamut
    pub palette: Palette,
}

impl Environment {
    /// Derive the environment for a configuration.
    pub fn new(config: &DisplayConfiguration) -> Self {
        let traits = config.traits.resolve();
        Self {
            bounds: Rectangle::new(
                Point::zero(),
                Size::new(config.size.width, config.size.height),
            ),
            safe_area: config.safe_area_insets,
            layout_margins: config.layout_margins,
            palette: Palette::for_traits(traits.appearance, traits.display_gamut),
            traits,
        }
    }

    /// Bounds with the safe-area insets removed.
    pub fn safe_bounds(&self) -> Rectangle {
        inset(self.bounds, self.safe_area)
    }

    /// True when content flows right to left.
    pub fn is_right_to_left(&self) -> bool {
        self.traits.is_right_to_left()
    }
}

/// Shrink a rectangle by `insets`, saturating at zero size.
pub fn inset(rect: Rectangle, insets: EdgeInsets) -> Rectangle {
    let width = rect.size.width.saturating_sub(insets.horizontal());
    let height = rect.size.height.saturating_sub(insets.vertical());
    Rectangle::new(
        rect.top_left + Point::new(to_i32(insets.left), to_i32(insets.top)),
        Size::new(width, height),
    )
}

/// Convert a pixel length to a coordinate, clamping at `i32::MAX`.
pub(crate) fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
