//! Hosting configuration

use snapshot_specs::DisplayConfiguration;
use snapshot_views::View;

use crate::bitmap::Bitmap;
use crate::error::SurfaceError;
use crate::surface::{RenderStats, RenderSurface};
use crate::window::SharedDisplay;

/// Where a view is hosted while it is captured.
///
/// Both modes produce identical pixels for identical inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HostingMode {
    /// Fresh isolated [`RenderSurface`] per capture
    #[default]
    Offscreen,
    /// Root of the [`SharedDisplay`] key window, replacing its content
    KeyWindow,
}

impl HostingMode {
    /// Render `view` under `config` in this hosting mode.
    pub fn render<V>(self, view: V, config: &DisplayConfiguration) -> Result<(Bitmap, RenderStats), SurfaceError>
    where
        V: View + Send + 'static,
    {
        tracing::debug!(mode = ?self, "Hosting view");
        match self {
            HostingMode::Offscreen => RenderSurface::new(*config).render_with_stats(&view),
            HostingMode::KeyWindow => {
                SharedDisplay::lock().snapshot_from_key_window_with_stats(Box::new(view), config)
            }
        }
    }
}

impl std::fmt::Display for HostingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostingMode::Offscreen => f.write_str("offscreen"),
            HostingMode::KeyWindow => f.write_str("key-window"),
        }
    }
}
