// Test file — unwrap/expect/panic acceptable in test code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! The panicking macro front end.

use snapshot_specs::{Appearance, DisplayConfiguration};
use snapshot_testing::{assert_snapshot, record_snapshot, source_location, SourceLocation};
use snapshot_views::prelude::*;

#[test]
fn source_location_points_at_this_file() {
    let loc = source_location!();
    assert!(loc.test_file().ends_with("tests/macros.rs"));
    assert!(loc.test_file().is_absolute());
    assert_eq!(
        loc.snapshot_path("X"),
        loc.test_file().parent().unwrap().join("snapshots/X.png")
    );
}

#[test]
fn record_then_assert_with_macros() {
    let dir = tempfile::tempdir().unwrap();
    let loc = SourceLocation::new(dir.path(), "tests/macros.rs", line!());
    let config = DisplayConfiguration::iphone_8(Appearance::Light);
    let view = || Text::new("Hello, world!").padding_all(16);

    let path = record_snapshot!(view(), "MacroContentView", config, loc);
    assert_eq!(path, dir.path().join("tests/snapshots/MacroContentView.png"));
    assert_snapshot!(view(), "MacroContentView", config, loc);
}

#[test]
#[should_panic(expected = "Snapshots do not match")]
fn assert_with_changed_view_panics() {
    let dir = tempfile::tempdir().unwrap();
    let loc = SourceLocation::new(dir.path(), "tests/macros.rs", line!());
    let config = DisplayConfiguration::iphone_8(Appearance::Light);

    record_snapshot!(Text::new("before"), "MacroChanged", config, loc);
    assert_snapshot!(Text::new("after"), "MacroChanged", config, loc);
}

#[test]
#[should_panic(expected = "record the snapshot before asserting")]
fn assert_without_baseline_panics() {
    assert_snapshot!(
        Text::new("never recorded"),
        "MacroNeverRecorded",
        DisplayConfiguration::iphone_8(Appearance::Light)
    );
}
