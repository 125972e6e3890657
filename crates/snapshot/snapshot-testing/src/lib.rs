//! Snapshot Testing Utilities
//!
//! Record a hosted view as a PNG baseline next to the test that produced
//! it, then assert later captures are byte-identical.
//!
//! # Quick start
//!
//! ```no_run
//! use snapshot_specs::{Appearance, DisplayConfiguration};
//! use snapshot_testing::{assert_snapshot, record_snapshot};
//! use snapshot_views::prelude::*;
//!
//! let view = || NavigationView::new(Text::new("Hello").navigation_title("Welcome"));
//! let config = DisplayConfiguration::iphone_8(Appearance::Light);
//!
//! // Writes <dir of this file>/snapshots/Welcome.png
//! record_snapshot!(view(), "Welcome", config);
//! assert_snapshot!(view(), "Welcome", config);
//! ```
//!
//! # Baselines
//!
//! Baselines live in a `snapshots/` directory beside the calling test file
//! and are named `<scenario>.png`. Recording overwrites unconditionally.
//! A failed assertion leaves the baseline alone and writes the new image to
//! the [`Comparator`]'s candidate directory (by default
//! `$TMPDIR/sheet-snapshot-candidates`).
//!
//! # Hosting
//!
//! [`record_snapshot!`] hosts the view in the shared display's key window;
//! [`assert_snapshot!`] renders offscreen. Both produce the same pixels.

mod comparator;
mod error;
mod location;
mod snapshotter;

pub use comparator::{Comparator, ComparisonResult, DEFAULT_CANDIDATE_DIR};
pub use error::SnapshotError;
pub use location::{SourceLocation, SNAPSHOTS_DIR};
pub use snapshotter::Snapshotter;

pub use snapshot_surface::HostingMode;

/// [`SourceLocation`] of the invocation site.
#[macro_export]
macro_rules! source_location {
    () => {
        $crate::SourceLocation::new(env!("CARGO_MANIFEST_DIR"), file!(), line!())
    };
}

/// Record `view` under `config` as the baseline `name`.
///
/// Hosts the view in the shared display's key window. Panics if the
/// snapshot cannot be rendered, encoded or written. Evaluates to the
/// baseline path.
///
/// The baseline goes next to the calling file unless a [`SourceLocation`]
/// is passed as a fourth argument.
#[macro_export]
macro_rules! record_snapshot {
    ($view:expr, $name:expr, $config:expr, $location:expr $(,)?) => {{
        let name: &str = $name;
        match $crate::Snapshotter::key_window().record_view($view, name, &$config, &$location) {
            Ok(path) => path,
            Err(err) => panic!("Failed to save snapshot {:?}: {}", name, err.report()),
        }
    }};
    ($view:expr, $name:expr, $config:expr $(,)?) => {
        $crate::record_snapshot!($view, $name, $config, $crate::source_location!())
    };
}

/// Assert `view` under `config` matches the baseline `name`.
///
/// Renders offscreen. Panics when the baseline is missing, when the images
/// differ (naming both the stored and the new file) or on I/O failure.
/// Takes an optional [`SourceLocation`] like [`record_snapshot!`].
#[macro_export]
macro_rules! assert_snapshot {
    ($view:expr, $name:expr, $config:expr, $location:expr $(,)?) => {{
        let name: &str = $name;
        match $crate::Snapshotter::new().assert_view($view, name, &$config, &$location) {
            Ok($crate::ComparisonResult::Match { .. }) => {}
            Ok($crate::ComparisonResult::Mismatch {
                baseline,
                candidate,
            }) => panic!(
                "Snapshots do not match. New snapshot: {} Stored snapshot: {}",
                candidate.display(),
                baseline.display()
            ),
            Err(err) => panic!("Snapshot {:?} could not be compared: {}", name, err.report()),
        }
    }};
    ($view:expr, $name:expr, $config:expr $(,)?) => {
        $crate::assert_snapshot!($view, $name, $config, $crate::source_location!())
    };
}
