//! Offscreen render surface.

use snapshot_specs::DisplayConfiguration;
use snapshot_views::{layout_root, Environment, View};

use crate::bitmap::Bitmap;
use crate::error::SurfaceError;
use crate::framebuffer::Framebuffer;
use crate::raster::rasterize;

/// Work done for one capture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Layout passes over the whole hierarchy
    pub layout_passes: u32,
    /// Paint passes (layout tree to display list)
    pub paint_passes: u32,
    /// Paint commands rasterized
    pub commands: usize,
}

/// An isolated surface that renders views under one configuration.
///
/// Nothing is shared between surfaces or between captures: the
/// configuration alone determines the pixels.
///
/// ```
/// use snapshot_specs::{Appearance, DisplayConfiguration};
/// use snapshot_surface::RenderSurface;
/// use snapshot_views::Text;
///
/// let surface = RenderSurface::new(DisplayConfiguration::iphone_8(Appearance::Light));
/// let bitmap = surface.render(&Text::new("Hello, world!")).unwrap();
/// assert_eq!((bitmap.width(), bitmap.height()), (375, 667));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSurface {
    config: DisplayConfiguration,
}

impl RenderSurface {
    /// Create a surface for `config`.
    pub fn new(config: DisplayConfiguration) -> Self {
        Self { config }
    }

    /// The configuration this surface renders with.
    pub fn config(&self) -> &DisplayConfiguration {
        &self.config
    }

    /// Render `view` to a bitmap of exactly the configured size.
    pub fn render(&self, view: &dyn View) -> Result<Bitmap, SurfaceError> {
        self.render_with_stats(view).map(|(bitmap, _)| bitmap)
    }

    /// Render `view` and report the passes it took.
    pub fn render_with_stats(&self, view: &dyn View) -> Result<(Bitmap, RenderStats), SurfaceError> {
        capture(view, &self.config)
    }
}

/// One synchronous layout pass, one paint pass, then rasterization.
pub(crate) fn capture(
    view: &dyn View,
    config: &DisplayConfiguration,
) -> Result<(Bitmap, RenderStats), SurfaceError> {
    let size = config.size;
    if size.is_empty() {
        return Err(SurfaceError::EmptySurface {
            width: size.width,
            height: size.height,
        });
    }

    let env = Environment::new(config);
    tracing::debug!(
        width = size.width,
        height = size.height,
        traits = %config.traits,
        "Rendering view"
    );

    let mut stats = RenderStats::default();

    let tree = layout_root(view, &env);
    stats.layout_passes += 1;
    tracing::trace!(nodes = tree.node_count(), "Layout pass complete");

    let list = tree.display_list();
    stats.paint_passes += 1;
    stats.commands = list.len();
    tracing::trace!(commands = list.len(), "Paint pass complete");

    let mut framebuffer = Framebuffer::new(size.width, size.height, env.palette.background);
    rasterize(&list, &mut framebuffer);

    Ok((framebuffer.to_bitmap(), stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapshot_specs::{Appearance, SurfaceSize};
    use snapshot_views::{Text, ViewExt};

    #[test]
    fn test_empty_surface_rejected() {
        let config = DisplayConfiguration::new(SurfaceSize::new(0, 100));
        let err = RenderSurface::new(config).render(&Text::new("x")).unwrap_err();
        assert!(matches!(err, SurfaceError::EmptySurface { width: 0, height: 100 }));
    }

    #[test]
    fn test_exact_dimensions() {
        let config = DisplayConfiguration::new(SurfaceSize::new(31, 17));
        let bitmap = RenderSurface::new(config).render(&Text::new("x")).unwrap();
        assert_eq!((bitmap.width(), bitmap.height()), (31, 17));
        assert_eq!(bitmap.as_rgba().len(), 31 * 17 * 4);
    }

    #[test]
    fn test_one_layout_one_paint() {
        let surface = RenderSurface::new(DisplayConfiguration::iphone_8(Appearance::Light));
        let view = Text::new("base").sheet(true, Text::new("top"));
        let (_, stats) = surface.render_with_stats(&view).unwrap();
        assert_eq!(stats.layout_passes, 1);
        assert_eq!(stats.paint_passes, 1);
        // background, base text, scrim, card, sheet text
        assert_eq!(stats.commands, 5);
    }

    #[test]
    fn test_appearance_changes_background() {
        let view = Text::new("x");
        let light = RenderSurface::new(DisplayConfiguration::iphone_8(Appearance::Light))
            .render(&view)
            .unwrap();
        let dark = RenderSurface::new(DisplayConfiguration::iphone_8(Appearance::Dark))
            .render(&view)
            .unwrap();
        assert_eq!(light.pixel(0, 0), Some([255, 255, 255, 255]));
        assert_eq!(dark.pixel(0, 0), Some([0, 0, 0, 255]));
    }
}
