//! Where a snapshot test lives, and where its baselines go.

use std::path::{Path, PathBuf};

/// Directory, next to the test file, that holds baselines.
pub const SNAPSHOTS_DIR: &str = "snapshots";

/// The calling test's source location.
///
/// Built by [`source_location!`](crate::source_location) from
/// `CARGO_MANIFEST_DIR`, `file!()` and `line!()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    /// Absolute directory of the crate that contains the test
    pub manifest_dir: PathBuf,
    /// Source file as reported by `file!()`
    pub file: PathBuf,
    /// Line of the invocation
    pub line: u32,
}

impl SourceLocation {
    /// Create a location.
    pub fn new(manifest_dir: impl Into<PathBuf>, file: impl Into<PathBuf>, line: u32) -> Self {
        Self {
            manifest_dir: manifest_dir.into(),
            file: file.into(),
            line,
        }
    }

    /// Absolute path of the test file.
    ///
    /// `file!()` is relative to the workspace root, which may be an ancestor
    /// of the crate. Every ancestor of `manifest_dir` whose path down to
    /// `manifest_dir` prefixes `file` is a candidate root. The outermost
    /// candidate under which the file exists wins; if the file exists under
    /// none of them, the outermost candidate is used.
    ///
    /// A standalone crate in a directory that shares its name with the first
    /// component of `file!()` (`/home/u/tests` with `tests/ui.rs`) has two
    /// candidates, and only the existence check tells them apart.
    pub fn test_file(&self) -> PathBuf {
        if self.file.is_absolute() {
            return self.file.clone();
        }
        let candidates: Vec<PathBuf> = self
            .manifest_dir
            .ancestors()
            .collect::<Vec<&Path>>()
            .into_iter()
            .rev()
            .filter(|root| {
                self.manifest_dir
                    .strip_prefix(root)
                    .is_ok_and(|crate_path| self.file.starts_with(crate_path))
            })
            .map(|root| root.join(&self.file))
            .collect();
        candidates
            .iter()
            .find(|path| path.is_file())
            .or_else(|| candidates.first())
            .cloned()
            .unwrap_or_else(|| self.manifest_dir.join(&self.file))
    }

    /// Baseline path for the scenario `name`:
    /// `<dir of test file>/snapshots/<name>.png`.
    pub fn snapshot_path(&self, name: &str) -> PathBuf {
        let test_file = self.test_file();
        let dir = test_file.parent().unwrap_or(&self.manifest_dir);
        dir.join(SNAPSHOTS_DIR).join(format!("{name}.png"))
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_workspace_member() {
        let loc = SourceLocation::new(
            "/work/repo/crates/sheet-app",
            "crates/sheet-app/tests/presenting_sheet.rs",
            12,
        );
        assert_eq!(
            loc.test_file(),
            PathBuf::from("/work/repo/crates/sheet-app/tests/presenting_sheet.rs")
        );
        assert_eq!(
            loc.snapshot_path("PresentingSheet"),
            PathBuf::from("/work/repo/crates/sheet-app/tests/snapshots/PresentingSheet.png")
        );
    }

    #[test]
    fn test_standalone_crate() {
        let loc = SourceLocation::new("/work/app", "tests/ui.rs", 1);
        assert_eq!(loc.test_file(), PathBuf::from("/work/app/tests/ui.rs"));
    }

    #[test]
    fn test_standalone_crate_named_like_its_test_dir() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("tests");
        std::fs::create_dir_all(manifest.join("tests")).unwrap();
        std::fs::write(manifest.join("tests/ui.rs"), "").unwrap();

        let loc = SourceLocation::new(&manifest, "tests/ui.rs", 1);
        assert_eq!(loc.test_file(), manifest.join("tests/ui.rs"));
        assert_eq!(
            loc.snapshot_path("Ui"),
            manifest.join("tests/snapshots/Ui.png")
        );
    }

    #[test]
    fn test_existing_workspace_file_preferred() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("crates/app");
        std::fs::create_dir_all(manifest.join("tests")).unwrap();
        std::fs::write(manifest.join("tests/it.rs"), "").unwrap();

        let loc = SourceLocation::new(&manifest, "crates/app/tests/it.rs", 1);
        assert_eq!(loc.test_file(), manifest.join("tests/it.rs"));
    }

    #[test]
    fn test_unit_test_in_src() {
        let loc = SourceLocation::new("/w/crates/a", "crates/a/src/lib.rs", 1);
        assert_eq!(
            loc.snapshot_path("Name"),
            PathBuf::from("/w/crates/a/src/snapshots/Name.png")
        );
    }

    #[test]
    fn test_absolute_file_used_as_is() {
        let loc = SourceLocation::new("/w/crates/a", "/elsewhere/t.rs", 1);
        assert_eq!(loc.test_file(), PathBuf::from("/elsewhere/t.rs"));
    }

    #[test]
    fn test_display() {
        let loc = SourceLocation::new("/w", "tests/t.rs", 42);
        assert_eq!(loc.to_string(), "tests/t.rs:42");
    }

    proptest! {
        #[test]
        fn prop_baseline_lands_in_crate(
            prefix in prop::collection::vec("[a-z]{1,6}", 1..4),
            member in prop::collection::vec("[a-z]{1,6}", 0..3),
            test in "[a-z]{1,8}",
            name in "[A-Za-z]{1,12}",
        ) {
            let root = PathBuf::from("/").join(prefix.join("/"));
            let crate_rel: PathBuf = member.iter().collect();
            let manifest = root.join(&crate_rel);
            let file = crate_rel.join("tests").join(format!("{test}.rs"));

            let loc = SourceLocation::new(&manifest, &file, 1);
            let path = loc.snapshot_path(&name);
            prop_assert!(path.starts_with(&manifest));
            prop_assert_eq!(path, manifest.join("tests/snapshots").join(format!("{name}.png")));
        }
    }
}
