//! sheet-app - Sheet Presentation Demo
//!
//! A single-screen app whose root scene always presents a sheet, plus the
//! screens its snapshot tests render.
//!
//! # Architecture
//!
//! - [`screens`]: view builders, pure functions of their inputs
//! - [`app`]: the root scene and booting it into an
//!   [`Application`](snapshot_surface::Application)
//!
//! The binary (`sheet-app`) boots the scene on the shared display and
//! writes the screen to a PNG.

pub mod app;
pub mod screens;

pub use app::{launch, root_scene, Device};
