//! Environment traits
//!
//! Each trait is an independent, optional value. A [`Traits`] bundle only
//! records what was explicitly set; [`Traits::resolve`] fills the gaps with
//! defaults. Combining two bundles is always explicit through
//! [`Traits::merged_over`], so no hidden ambient state leaks into a capture.

use core::fmt;

/// Take `$top` when set, otherwise fall back to `$base`.
macro_rules! overlay {
    ($top:expr, $base:expr) => {
        match $top {
            Some(value) => Some(value),
            None => $base,
        }
    };
}

/// Whether the device reports 3D touch / pressure support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ForceTouchCapability {
    /// No pressure support
    #[default]
    Unavailable,
    /// Pressure-sensitive touch
    Available,
}

/// Horizontal reading direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum LayoutDirection {
    /// Leading edge is the left edge
    #[default]
    LeftToRight,
    /// Leading edge is the right edge
    RightToLeft,
}

/// Preferred text size chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ContentSizeCategory {
    /// Smaller than default
    Small,
    /// Slightly smaller than default
    Medium,
    /// System default
    #[default]
    Large,
    /// Larger than default
    ExtraLarge,
}

/// Device family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum UserInterfaceIdiom {
    /// Phone-class device
    #[default]
    Phone,
    /// Tablet-class device
    Pad,
}

/// Coarse classification of available space along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum SizeClass {
    /// Constrained space
    Compact,
    /// Expansive space
    Regular,
}

/// Physical pixels per point. Recorded for fidelity; the rasterizer draws
/// one bitmap pixel per configuration pixel regardless of scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DisplayScale(pub u8);

impl DisplayScale {
    /// Standard-density screen.
    pub const ONE: Self = Self(1);
    /// Retina screen.
    pub const TWO: Self = Self(2);
    /// Super-retina screen.
    pub const THREE: Self = Self(3);

    /// The scale factor.
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for DisplayScale {
    fn default() -> Self {
        Self::ONE
    }
}

/// Colour gamut of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum DisplayGamut {
    /// Standard RGB
    #[default]
    Srgb,
    /// Display P3 wide colour
    P3,
}

/// Light or dark interface style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Appearance {
    /// Light backgrounds, dark text
    #[default]
    Light,
    /// Dark backgrounds, light text
    Dark,
}

impl fmt::Display for ForceTouchCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unavailable => "unavailable",
            Self::Available => "available",
        })
    }
}

impl fmt::Display for LayoutDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::LeftToRight => "left-to-right",
            Self::RightToLeft => "right-to-left",
        })
    }
}

impl fmt::Display for ContentSizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
            Self::ExtraLarge => "XL",
        })
    }
}

impl fmt::Display for UserInterfaceIdiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Phone => "phone",
            Self::Pad => "pad",
        })
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Compact => "compact",
            Self::Regular => "regular",
        })
    }
}

impl fmt::Display for DisplayScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

impl fmt::Display for DisplayGamut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Srgb => "sRGB",
            Self::P3 => "P3",
        })
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

/// A bundle of explicitly set environment traits.
///
/// Unset fields mean "inherit": they take the value of whatever bundle this
/// one is merged over, or the default when resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Traits {
    /// Pressure-sensitive touch support
    pub force_touch: Option<ForceTouchCapability>,
    /// Reading direction
    pub layout_direction: Option<LayoutDirection>,
    /// Preferred text size
    pub content_size: Option<ContentSizeCategory>,
    /// Device family
    pub idiom: Option<UserInterfaceIdiom>,
    /// Horizontal size class
    pub horizontal_size_class: Option<SizeClass>,
    /// Vertical size class
    pub vertical_size_class: Option<SizeClass>,
    /// Pixel density
    pub display_scale: Option<DisplayScale>,
    /// Colour gamut
    pub display_gamut: Option<DisplayGamut>,
    /// Light or dark style
    pub appearance: Option<Appearance>,
}

/// Traits with every field decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedTraits {
    /// Pressure-sensitive touch support
    pub force_touch: ForceTouchCapability,
    /// Reading direction
    pub layout_direction: LayoutDirection,
    /// Preferred text size
    pub content_size: ContentSizeCategory,
    /// Device family
    pub idiom: UserInterfaceIdiom,
    /// Horizontal size class
    pub horizontal_size_class: SizeClass,
    /// Vertical size class
    pub vertical_size_class: SizeClass,
    /// Pixel density
    pub display_scale: DisplayScale,
    /// Colour gamut
    pub display_gamut: DisplayGamut,
    /// Light or dark style
    pub appearance: Appearance,
}

impl Traits {
    /// No trait set.
    pub const EMPTY: Self = Self {
        force_touch: None,
        layout_direction: None,
        content_size: None,
        idiom: None,
        horizontal_size_class: None,
        vertical_size_class: None,
        display_scale: None,
        display_gamut: None,
        appearance: None,
    };

    /// Set the force-touch capability.
    #[must_use]
    pub const fn with_force_touch(mut self, value: ForceTouchCapability) -> Self {
        self.force_touch = Some(value);
        self
    }

    /// Set the layout direction.
    #[must_use]
    pub const fn with_layout_direction(mut self, value: LayoutDirection) -> Self {
        self.layout_direction = Some(value);
        self
    }

    /// Set the preferred content size category.
    #[must_use]
    pub const fn with_content_size(mut self, value: ContentSizeCategory) -> Self {
        self.content_size = Some(value);
        self
    }

    /// Set the device idiom.
    #[must_use]
    pub const fn with_idiom(mut self, value: UserInterfaceIdiom) -> Self {
        self.idiom = Some(value);
        self
    }

    /// Set the horizontal size class.
    #[must_use]
    pub const fn with_horizontal_size_class(mut self, value: SizeClass) -> Self {
        self.horizontal_size_class = Some(value);
        self
    }

    /// Set the vertical size class.
    #[must_use]
    pub const fn with_vertical_size_class(mut self, value: SizeClass) -> Self {
        self.vertical_size_class = Some(value);
        self
    }

    /// Set the display scale.
    #[must_use]
    pub const fn with_display_scale(mut self, value: DisplayScale) -> Self {
        self.display_scale = Some(value);
        self
    }

    /// Set the display gamut.
    #[must_use]
    pub const fn with_display_gamut(mut self, value: DisplayGamut) -> Self {
        self.display_gamut = Some(value);
        self
    }

    /// Set the appearance.
    #[must_use]
    pub const fn with_appearance(mut self, value: Appearance) -> Self {
        self.appearance = Some(value);
        self
    }

    /// Combine two bundles: every field set on `self` wins, unset fields
    /// come from `base`.
    #[must_use]
    pub const fn merged_over(&self, base: &Traits) -> Traits {
        Traits {
            force_touch: overlay!(self.force_touch, base.force_touch),
            layout_direction: overlay!(self.layout_direction, base.layout_direction),
            content_size: overlay!(self.content_size, base.content_size),
            idiom: overlay!(self.idiom, base.idiom),
            horizontal_size_class: overlay!(self.horizontal_size_class, base.horizontal_size_class),
            vertical_size_class: overlay!(self.vertical_size_class, base.vertical_size_class),
            display_scale: overlay!(self.display_scale, base.display_scale),
            display_gamut: overlay!(self.display_gamut, base.display_gamut),
            appearance: overlay!(self.appearance, base.appearance),
        }
    }

    /// Fill every unset field with its default.
    ///
    /// Size classes default from the idiom: phones are compact × regular,
    /// pads are regular × regular.
    pub fn resolve(&self) -> ResolvedTraits {
        let idiom = self.idiom.unwrap_or_default();
        let default_horizontal = match idiom {
            UserInterfaceIdiom::Phone => SizeClass::Compact,
            UserInterfaceIdiom::Pad => SizeClass::Regular,
        };
        ResolvedTraits {
            force_touch: self.force_touch.unwrap_or_default(),
            layout_direction: self.layout_direction.unwrap_or_default(),
            content_size: self.content_size.unwrap_or_default(),
            idiom,
            horizontal_size_class: self.horizontal_size_class.unwrap_or(default_horizontal),
            vertical_size_class: self.vertical_size_class.unwrap_or(SizeClass::Regular),
            display_scale: self.display_scale.unwrap_or_default(),
            display_gamut: self.display_gamut.unwrap_or_default(),
            appearance: self.appearance.unwrap_or_default(),
        }
    }

    /// Number of explicitly set traits.
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    /// True when no trait is set.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The explicitly set traits as `(name, value)` pairs, in a fixed order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &dyn fmt::Display)> + '_ {
        let all: [(&'static str, Option<&dyn fmt::Display>); 9] = [
            ("force_touch", self.force_touch.as_ref().map(|v| v as &dyn fmt::Display)),
            (
                "layout_direction",
                self.layout_direction.as_ref().map(|v| v as &dyn fmt::Display),
            ),
            ("content_size", self.content_size.as_ref().map(|v| v as &dyn fmt::Display)),
            ("idiom", self.idiom.as_ref().map(|v| v as &dyn fmt::Display)),
            (
                "horizontal_size_class",
                self.horizontal_size_class.as_ref().map(|v| v as &dyn fmt::Display),
            ),
            (
                "vertical_size_class",
                self.vertical_size_class.as_ref().map(|v| v as &dyn fmt::Display),
            ),
            ("display_scale", self.display_scale.as_ref().map(|v| v as &dyn fmt::Display)),
            ("display_gamut", self.display_gamut.as_ref().map(|v| v as &dyn fmt::Display)),
            ("appearance", self.appearance.as_ref().map(|v| v as &dyn fmt::Display)),
        ];
        all.into_iter()
            .filter_map(|(name, value)| value.map(|value| (name, value)))
    }
}

impl fmt::Display for Traits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, value) in self.entries() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{name}={value}")?;
            first = false;
        }
        Ok(())
    }
}

impl ResolvedTraits {
    /// True for right-to-left layouts.
    pub fn is_right_to_left(&self) -> bool {
        self.layout_direction == LayoutDirection::RightToLeft
    }
}

impl From<ResolvedTraits> for Traits {
    fn from(resolved: ResolvedTraits) -> Self {
        Traits {
            force_touch: Some(resolved.force_touch),
            layout_direction: Some(resolved.layout_direction),
            content_size: Some(resolved.content_size),
            idiom: Some(resolved.idiom),
            horizontal_size_class: Some(resolved.horizontal_size_class),
            vertical_size_class: Some(resolved.vertical_size_class),
            display_scale: Some(resolved.display_scale),
            display_gamut: Some(resolved.display_gamut),
            appearance: Some(resolved.appearance),
        }
    }
}
