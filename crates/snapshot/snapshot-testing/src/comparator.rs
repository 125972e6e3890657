//! Baseline recording and comparison.

use std::path::{Path, PathBuf};

use snapshot_surface::Bitmap;

use crate::error::SnapshotError;
use crate::location::SourceLocation;

/// Directory name, under the system temp dir, that receives candidates.
pub const DEFAULT_CANDIDATE_DIR: &str = "sheet-snapshot-candidates";

/// Outcome of comparing a bitmap with its baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparisonResult {
    /// Encoded bytes are identical to the baseline.
    Match {
        /// Baseline that was compared against
        baseline: PathBuf,
    },
    /// Bytes differ; the new image was written to `candidate`.
    Mismatch {
        /// Baseline, left untouched
        baseline: PathBuf,
        /// Newly written candidate image
        candidate: PathBuf,
    },
}

impl ComparisonResult {
    /// True for [`ComparisonResult::Match`].
    pub fn is_match(&self) -> bool {
        matches!(self, ComparisonResult::Match { .. })
    }

    /// The baseline path in either case.
    pub fn baseline(&self) -> &Path {
        match self {
            ComparisonResult::Match { baseline } | ComparisonResult::Mismatch { baseline, .. } => {
                baseline
            }
        }
    }
}

/// Writes baselines and compares captures against them byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparator {
    candidate_dir: PathBuf,
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new(std::env::temp_dir().join(DEFAULT_CANDIDATE_DIR))
    }
}

impl Comparator {
    /// Write candidates into `candidate_dir`.
    pub fn new(candidate_dir: impl Into<PathBuf>) -> Self {
        Self {
            candidate_dir: candidate_dir.into(),
        }
    }

    /// Where candidates go.
    pub fn candidate_dir(&self) -> &Path {
        &self.candidate_dir
    }

    /// Candidate path for `baseline`. Never equal to `baseline`.
    pub fn candidate_path(&self, baseline: &Path) -> PathBuf {
        let file_name = baseline
            .file_name()
            .map_or_else(|| PathBuf::from("snapshot.png"), PathBuf::from);
        let candidate = self.candidate_dir.join(&file_name);
        if candidate == baseline {
            let stem = baseline
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            self.candidate_dir.join(format!("{stem}.candidate.png"))
        } else {
            candidate
        }
    }

    /// Store `bitmap` as the baseline for `name`, replacing any previous one.
    ///
    /// Returns the baseline path.
    pub fn record(
        &self,
        bitmap: &Bitmap,
        name: &str,
        location: &SourceLocation,
    ) -> Result<PathBuf, SnapshotError> {
        let baseline = location.snapshot_path(name);
        let bytes = encode(bitmap)?;
        write_creating_dirs(&baseline, &bytes)?;
        tracing::info!(
            path = %baseline.display(),
            bytes = bytes.len(),
            test = %location,
            "Recorded snapshot"
        );
        Ok(baseline)
    }

    /// Compare `bitmap` with the baseline for `name`.
    ///
    /// On mismatch the new image is written to the candidate directory and
    /// the baseline is left as it was.
    pub fn assert_matches(
        &self,
        bitmap: &Bitmap,
        name: &str,
        location: &SourceLocation,
    ) -> Result<ComparisonResult, SnapshotError> {
        let baseline = location.snapshot_path(name);
        let bytes = encode(bitmap)?;

        let stored = std::fs::read(&baseline).map_err(|source| SnapshotError::BaselineMissing {
            path: baseline.clone(),
            source,
        })?;

        if stored == bytes {
            tracing::debug!(path = %baseline.display(), "Snapshot matches");
            return Ok(ComparisonResult::Match { baseline });
        }

        let candidate = self.candidate_path(&baseline);
        write_creating_dirs(&candidate, &bytes)?;

        let differing = Bitmap::from_png(&stored)
            .ok()
            .and_then(|previous| previous.diff_count(bitmap));
        tracing::warn!(
            baseline = %baseline.display(),
            candidate = %candidate.display(),
            differing_pixels = ?differing,
            test = %location,
            "Snapshot mismatch"
        );
        Ok(ComparisonResult::Mismatch {
            baseline,
            candidate,
        })
    }
}

fn encode(bitmap: &Bitmap) -> Result<Vec<u8>, SnapshotError> {
    let bytes = bitmap.encode_png()?;
    if bytes.is_empty() {
        return Err(SnapshotError::EmptyEncoding);
    }
    Ok(bytes)
}

fn write_creating_dirs(path: &Path, bytes: &[u8]) -> Result<(), SnapshotError> {
    let persistence = |source| SnapshotError::Persistence {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(persistence)?;
    }
    std::fs::write(path, bytes).map_err(persistence)
}
