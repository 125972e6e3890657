//! Tablet-class profiles

use crate::{
    Appearance, ContentSizeCategory, DisplayConfiguration, DisplayGamut, DisplayScale,
    EdgeInsets, ForceTouchCapability, LayoutDirection, SizeClass, SurfaceSize, Traits,
    UserInterfaceIdiom,
};

/// Fixed trait bundle of a 9.7" iPad, without an appearance.
pub const IPAD_9_7_TRAITS: Traits = Traits::EMPTY
    .with_force_touch(ForceTouchCapability::Unavailable)
    .with_layout_direction(LayoutDirection::LeftToRight)
    .with_content_size(ContentSizeCategory::Large)
    .with_idiom(UserInterfaceIdiom::Pad)
    .with_horizontal_size_class(SizeClass::Regular)
    .with_vertical_size_class(SizeClass::Regular)
    .with_display_scale(DisplayScale::TWO)
    .with_display_gamut(DisplayGamut::P3);

impl DisplayConfiguration {
    /// 9.7" iPad in portrait (768×1024), regular in both dimensions.
    pub const fn ipad_9_7(appearance: Appearance) -> Self {
        DisplayConfiguration {
            size: SurfaceSize::new(768, 1024),
            safe_area_insets: EdgeInsets::new(20, 0, 0, 0),
            layout_margins: EdgeInsets::new(20, 20, 0, 20),
            traits: IPAD_9_7_TRAITS.with_appearance(appearance),
        }
    }
}
