//! Render-and-compare in one call.

use std::path::PathBuf;

use snapshot_specs::DisplayConfiguration;
use snapshot_surface::HostingMode;
use snapshot_views::View;

use crate::comparator::{Comparator, ComparisonResult};
use crate::error::SnapshotError;
use crate::location::SourceLocation;

/// Hosts a view, captures it, and records or compares the capture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshotter {
    /// Baseline and candidate handling
    pub comparator: Comparator,
    /// How views are hosted during capture
    pub hosting: HostingMode,
}

impl Snapshotter {
    /// Offscreen hosting, default candidate directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Host in the shared display's key window.
    pub fn key_window() -> Self {
        Self::new().with_hosting(HostingMode::KeyWindow)
    }

    /// Change the hosting mode.
    #[must_use]
    pub fn with_hosting(mut self, hosting: HostingMode) -> Self {
        self.hosting = hosting;
        self
    }

    /// Change the comparator.
    #[must_use]
    pub fn with_comparator(mut self, comparator: Comparator) -> Self {
        self.comparator = comparator;
        self
    }

    /// Render `view` under `config` and store it as the baseline for `name`.
    pub fn record_view<V>(
        &self,
        view: V,
        name: &str,
        config: &DisplayConfiguration,
        location: &SourceLocation,
    ) -> Result<PathBuf, SnapshotError>
    where
        V: View + Send + 'static,
    {
        let (bitmap, _) = self.hosting.render(view, config)?;
        self.comparator.record(&bitmap, name, location)
    }

    /// Render `view` under `config` and compare it with the baseline for
    /// `name`.
    pub fn assert_view<V>(
        &self,
        view: V,
        name: &str,
        config: &DisplayConfiguration,
        location: &SourceLocation,
    ) -> Result<ComparisonResult, SnapshotError>
    where
        V: View + Send + 'static,
    {
        let (bitmap, _) = self.hosting.render(view, config)?;
        self.comparator.assert_matches(&bitmap, name, location)
    }
}
