// Test file — unwrap/expect/panic acceptable in test code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Render + compare through `Snapshotter`, with baselines in a temp dir.

use std::path::Path;

use snapshot_specs::{Appearance, DisplayConfiguration, SurfaceSize};
use snapshot_testing::{
    Comparator, ComparisonResult, HostingMode, SnapshotError, Snapshotter, SourceLocation,
};
use snapshot_views::prelude::*;

fn presenting_sheet(sheet_text: &str) -> impl View + Send + 'static {
    NavigationView::new(
        Text::new("Hello, World!")
            .navigation_title("Welcome")
            .sheet(true, Text::new(sheet_text)),
    )
}

fn location(root: &Path) -> SourceLocation {
    SourceLocation::new(root, "tests/presenting_sheet.rs", line!())
}

fn snapshotter(root: &Path, hosting: HostingMode) -> Snapshotter {
    Snapshotter::new()
        .with_hosting(hosting)
        .with_comparator(Comparator::new(root.join("candidates")))
}

#[test]
fn key_window_record_then_offscreen_assert() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let dir = tempfile::tempdir().unwrap();
    let loc = location(dir.path());
    let config = DisplayConfiguration::iphone_8(Appearance::Light);

    let baseline = snapshotter(dir.path(), HostingMode::KeyWindow)
        .record_view(presenting_sheet("I should be on top"), "PresentingSheet", &config, &loc)
        .unwrap();
    assert_eq!(baseline, dir.path().join("tests/snapshots/PresentingSheet.png"));

    let result = snapshotter(dir.path(), HostingMode::Offscreen)
        .assert_view(presenting_sheet("I should be on top"), "PresentingSheet", &config, &loc)
        .unwrap();
    assert!(result.is_match());
}

#[test]
fn changed_sheet_text_is_a_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let loc = location(dir.path());
    let config = DisplayConfiguration::iphone_8(Appearance::Light);
    let snapshotter = snapshotter(dir.path(), HostingMode::Offscreen);

    let baseline = snapshotter
        .record_view(presenting_sheet("I should be on top"), "PresentingSheet", &config, &loc)
        .unwrap();
    let recorded = std::fs::read(&baseline).unwrap();

    let result = snapshotter
        .assert_view(presenting_sheet("Different text"), "PresentingSheet", &config, &loc)
        .unwrap();
    match result {
        ComparisonResult::Mismatch {
            baseline: reported,
            candidate,
        } => {
            assert_eq!(reported, baseline);
            assert_ne!(candidate, baseline);
            assert!(candidate.exists());
        }
        ComparisonResult::Match { .. } => panic!("different sheet text must not match"),
    }
    assert_eq!(std::fs::read(&baseline).unwrap(), recorded);
}

#[test]
fn appearances_have_independent_baselines() {
    let dir = tempfile::tempdir().unwrap();
    let loc = location(dir.path());
    let snapshotter = snapshotter(dir.path(), HostingMode::Offscreen);
    let light = DisplayConfiguration::iphone_8(Appearance::Light);
    let dark = DisplayConfiguration::iphone_8(Appearance::Dark);

    let light_path = snapshotter
        .record_view(presenting_sheet("I should be on top"), "Sheet_light", &light, &loc)
        .unwrap();
    let light_bytes = std::fs::read(&light_path).unwrap();
    let dark_path = snapshotter
        .record_view(presenting_sheet("I should be on top"), "Sheet_dark", &dark, &loc)
        .unwrap();

    assert_ne!(light_path, dark_path);
    assert_eq!(std::fs::read(&light_path).unwrap(), light_bytes);
    assert_ne!(std::fs::read(&dark_path).unwrap(), light_bytes);

    for (name, config) in [("Sheet_light", light), ("Sheet_dark", dark)] {
        let result = snapshotter
            .assert_view(presenting_sheet("I should be on top"), name, &config, &loc)
            .unwrap();
        assert!(result.is_match(), "{name} should match its own baseline");
    }
}

#[test]
fn assert_without_record_reports_missing_baseline() {
    let dir = tempfile::tempdir().unwrap();
    let loc = location(dir.path());
    let err = snapshotter(dir.path(), HostingMode::Offscreen)
        .assert_view(
            presenting_sheet("I should be on top"),
            "NeverRecorded",
            &DisplayConfiguration::iphone_8(Appearance::Light),
            &loc,
        )
        .unwrap_err();
    assert!(matches!(err, SnapshotError::BaselineMissing { .. }));
    assert!(!loc.snapshot_path("NeverRecorded").exists());
}

#[test]
fn empty_surface_is_a_render_error() {
    let dir = tempfile::tempdir().unwrap();
    let loc = location(dir.path());
    let err = snapshotter(dir.path(), HostingMode::Offscreen)
        .record_view(
            Text::new("x"),
            "Empty",
            &DisplayConfiguration::new(SurfaceSize::new(0, 0)),
            &loc,
        )
        .unwrap_err();
    assert!(matches!(err, SnapshotError::Render(_)));
    assert!(!loc.snapshot_path("Empty").exists());
}
