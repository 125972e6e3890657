//! Root scene and app launch.

use snapshot_specs::{Appearance, DisplayConfiguration};
use snapshot_surface::Application;
use snapshot_views::prelude::*;

use crate::screens::{content_view, ROOT_SHEET_TEXT};

/// Device profile the app runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Device {
    /// iPhone 8 (compact width)
    #[default]
    Iphone8,
    /// iPad 9.7" (regular width)
    Ipad,
}

impl Device {
    /// Display configuration for this device.
    pub fn configuration(self, appearance: Appearance) -> DisplayConfiguration {
        match self {
            Device::Iphone8 => DisplayConfiguration::iphone_8(appearance),
            Device::Ipad => DisplayConfiguration::ipad_9_7(appearance),
        }
    }
}

/// The window's root content: main content with its sheet always shown.
pub fn root_scene() -> impl View + Send + 'static {
    content_view().sheet(true, Text::new(ROOT_SHEET_TEXT))
}

/// Install the root scene in `app`'s key window and let it commit.
pub fn launch(app: &mut Application) {
    app.set_root(root_scene().boxed());
    let committed = app.run_loop_pass();
    tracing::info!(tasks = committed, "Launched root scene");
}
