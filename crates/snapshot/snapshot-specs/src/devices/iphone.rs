//! Phone-class profiles

use crate::{
    Appearance, ContentSizeCategory, DisplayConfiguration, DisplayGamut, DisplayScale,
    EdgeInsets, ForceTouchCapability, LayoutDirection, SizeClass, SurfaceSize, Traits,
    UserInterfaceIdiom,
};

/// Fixed trait bundle of an iPhone 8, without an appearance.
///
/// - Force touch available, left-to-right, medium content size
/// - Phone idiom, compact width, regular height
/// - 2x scale, P3 gamut
pub const IPHONE_8_TRAITS: Traits = Traits::EMPTY
    .with_force_touch(ForceTouchCapability::Available)
    .with_layout_direction(LayoutDirection::LeftToRight)
    .with_content_size(ContentSizeCategory::Medium)
    .with_idiom(UserInterfaceIdiom::Phone)
    .with_horizontal_size_class(SizeClass::Compact)
    .with_vertical_size_class(SizeClass::Regular)
    .with_display_scale(DisplayScale::TWO)
    .with_display_gamut(DisplayGamut::P3);

impl DisplayConfiguration {
    /// iPhone 8 in portrait (375×667).
    ///
    /// Status bar safe area of 20 at the top, layout margins of 20 at the
    /// top and 16 on both sides.
    pub const fn iphone_8(appearance: Appearance) -> Self {
        DisplayConfiguration {
            size: SurfaceSize::new(375, 667),
            safe_area_insets: EdgeInsets::new(20, 0, 0, 0),
            layout_margins: EdgeInsets::new(20, 16, 0, 16),
            traits: IPHONE_8_TRAITS.with_appearance(appearance),
        }
    }
}
