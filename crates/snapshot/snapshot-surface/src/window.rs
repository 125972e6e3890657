//! Key-window hosting.
//!
//! An [`Application`] owns a [`KeyWindow`] and the [`RunLoop`] that feeds
//! it. Replacing the window's root content is asynchronous: the change is
//! queued and only becomes visible once the run loop has been drained.
//! [`Application::snapshot_from_key_window`] does both steps before it
//! captures.
//!
//! [`SharedDisplay`] is the one process-wide application, for code that
//! needs a global display. Everything else passes an `Application` value
//! explicitly.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use embedded_graphics::prelude::Size;
use embedded_graphics::primitives::Rectangle;
use once_cell::sync::Lazy;
use snapshot_specs::{Appearance, DisplayConfiguration};
use snapshot_views::{AnyView, Constraints, Environment, LayoutNode, View};

use crate::bitmap::Bitmap;
use crate::error::SurfaceError;
use crate::surface::{capture, RenderStats};

/// Work scheduled on the run loop.
pub enum WindowTask {
    /// Replace the key window's root content.
    SetRoot(AnyView),
    /// Remove the key window's root content.
    ClearRoot,
}

impl std::fmt::Debug for WindowTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowTask::SetRoot(_) => f.write_str("SetRoot(..)"),
            WindowTask::ClearRoot => f.write_str("ClearRoot"),
        }
    }
}

/// FIFO queue of pending window work.
#[derive(Debug, Default)]
pub struct RunLoop {
    pending: VecDeque<WindowTask>,
}

impl RunLoop {
    /// Queue a task for the next pass.
    pub fn schedule(&mut self, task: WindowTask) {
        self.pending.push_back(task);
    }

    /// Number of queued tasks.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Run every task queued before the pass started, in order.
    ///
    /// Returns how many tasks ran.
    pub fn run_pass(&mut self, window: &mut KeyWindow) -> usize {
        let count = self.pending.len();
        for task in self.pending.drain(..count) {
            window.apply(task);
        }
        count
    }
}

/// The window that currently receives content.
#[derive(Default)]
pub struct KeyWindow {
    root: Option<AnyView>,
    commits: u64,
}

impl KeyWindow {
    /// Committed root content, if any.
    pub fn root(&self) -> Option<&dyn View> {
        self.root.as_deref().map(|view| view as &dyn View)
    }

    /// Number of root changes committed so far.
    pub fn commits(&self) -> u64 {
        self.commits
    }

    fn apply(&mut self, task: WindowTask) {
        self.root = match task {
            WindowTask::SetRoot(view) => Some(view),
            WindowTask::ClearRoot => None,
        };
        self.commits += 1;
    }
}

impl std::fmt::Debug for KeyWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyWindow")
            .field("has_root", &self.root.is_some())
            .field("commits", &self.commits)
            .finish()
    }
}

/// Stand-in root for a window without content.
struct EmptyRoot;

impl View for EmptyRoot {
    fn size_that_fits(&self, _constraints: Constraints, _env: &Environment) -> Size {
        Size::zero()
    }

    fn layout(&self, bounds: Rectangle, _env: &Environment) -> LayoutNode {
        LayoutNode::empty(bounds)
    }
}

/// A test display: ambient device configuration, key window and run loop.
#[derive(Debug)]
pub struct Application {
    ambient: DisplayConfiguration,
    window: KeyWindow,
    run_loop: RunLoop,
}

impl Default for Application {
    fn default() -> Self {
        Self::new(DisplayConfiguration::iphone_8(Appearance::Light))
    }
}

impl Application {
    /// Create an application whose window runs on `ambient`.
    pub fn new(ambient: DisplayConfiguration) -> Self {
        Self {
            ambient,
            window: KeyWindow::default(),
            run_loop: RunLoop::default(),
        }
    }

    /// The device configuration the window runs on.
    pub fn ambient(&self) -> &DisplayConfiguration {
        &self.ambient
    }

    /// The key window.
    pub fn key_window(&self) -> &KeyWindow {
        &self.window
    }

    /// The pending-work queue.
    pub fn run_loop(&self) -> &RunLoop {
        &self.run_loop
    }

    /// Queue `view` as the new root. Not visible until the run loop drains.
    pub fn set_root(&mut self, view: AnyView) {
        tracing::debug!("Queueing root replacement");
        self.run_loop.schedule(WindowTask::SetRoot(view));
    }

    /// Queue removal of the root content.
    pub fn clear_root(&mut self) {
        self.run_loop.schedule(WindowTask::ClearRoot);
    }

    /// Drain one pass of the run loop.
    pub fn run_loop_pass(&mut self) -> usize {
        let ran = self.run_loop.run_pass(&mut self.window);
        tracing::trace!(tasks = ran, "Run loop pass");
        ran
    }

    /// Capture the committed window content without draining.
    ///
    /// `config` supplies size and insets; its traits are merged over the
    /// ambient traits, with `config` winning.
    pub fn capture(&self, config: &DisplayConfiguration) -> Result<(Bitmap, RenderStats), SurfaceError> {
        let effective = DisplayConfiguration {
            traits: config.traits.merged_over(&self.ambient.traits),
            ..*config
        };
        match self.window.root() {
            Some(root) => capture(root, &effective),
            None => capture(&EmptyRoot, &effective),
        }
    }

    /// Make `view` the window's root, drain one run loop pass, and capture.
    ///
    /// Previous root content is discarded.
    pub fn snapshot_from_key_window(
        &mut self,
        view: AnyView,
        config: &DisplayConfiguration,
    ) -> Result<Bitmap, SurfaceError> {
        self.snapshot_from_key_window_with_stats(view, config)
            .map(|(bitmap, _)| bitmap)
    }

    /// [`snapshot_from_key_window`](Self::snapshot_from_key_window) with
    /// render statistics.
    pub fn snapshot_from_key_window_with_stats(
        &mut self,
        view: AnyView,
        config: &DisplayConfiguration,
    ) -> Result<(Bitmap, RenderStats), SurfaceError> {
        self.set_root(view);
        self.run_loop_pass();
        self.capture(config)
    }
}

static SHARED: Lazy<Mutex<Application>> = Lazy::new(|| Mutex::new(Application::default()));

/// The process-wide application.
///
/// Starts on the iPhone 8 light configuration.
#[derive(Debug, Clone, Copy)]
pub struct SharedDisplay;

impl SharedDisplay {
    /// Lock the shared application.
    ///
    /// A panic while the lock was held does not make the display unusable;
    /// the guard is recovered.
    pub fn lock() -> MutexGuard<'static, Application> {
        SHARED.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
