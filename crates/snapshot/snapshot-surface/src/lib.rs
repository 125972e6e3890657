//! Snapshot Render Surface
//!
//! Hosts a view hierarchy on a fixed virtual display and captures it as an
//! RGBA [`Bitmap`]. Every capture is one synchronous layout pass followed by
//! one paint pass, rasterized with `embedded-graphics` onto a CPU
//! [`Framebuffer`].
//!
//! # Hosting modes
//!
//! - [`RenderSurface`]: isolated offscreen surface, no shared state
//! - [`Application`]: a key window fed by a [`RunLoop`]; content is
//!   committed only when the run loop drains. [`SharedDisplay`] holds the
//!   process-wide instance.
//!
//! # Example
//!
//! ```
//! use snapshot_specs::{Appearance, DisplayConfiguration};
//! use snapshot_surface::{Application, RenderSurface};
//! use snapshot_views::prelude::*;
//!
//! let config = DisplayConfiguration::iphone_8(Appearance::Light);
//! let view = || Text::new("Hello").sheet(true, Text::new("On top"));
//!
//! let offscreen = RenderSurface::new(config).render(&view()).unwrap();
//!
//! let mut app = Application::new(config);
//! let hosted = app.snapshot_from_key_window(view().boxed(), &config).unwrap();
//!
//! assert_eq!(offscreen, hosted);
//! let png = offscreen.encode_png().unwrap();
//! assert!(png.starts_with(b"\x89PNG"));
//! ```

mod bitmap;
pub mod config;
mod error;
mod framebuffer;
pub mod raster;
mod surface;
pub mod window;

pub use bitmap::Bitmap;
pub use config::HostingMode;
pub use error::SurfaceError;
pub use framebuffer::Framebuffer;
pub use surface::{RenderStats, RenderSurface};
pub use window::{Application, KeyWindow, RunLoop, SharedDisplay, WindowTask};
