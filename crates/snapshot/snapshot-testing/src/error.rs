//! Snapshot errors

use std::path::PathBuf;

use snapshot_surface::SurfaceError;

/// Why a snapshot could not be recorded or compared.
///
/// A pixel mismatch is not an error; it is reported as
/// [`ComparisonResult::Mismatch`](crate::ComparisonResult::Mismatch).
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The bitmap could not be encoded as PNG.
    #[error("failed to encode snapshot as PNG")]
    Encoding(#[source] image::ImageError),

    /// Encoding succeeded but produced no bytes.
    #[error("PNG encoding produced no data")]
    EmptyEncoding,

    /// No baseline to compare against.
    #[error("unable to read baseline {}; record the snapshot before asserting", path.display())]
    BaselineMissing {
        /// Expected baseline location
        path: PathBuf,
        /// Why it could not be read
        #[source]
        source: std::io::Error,
    },

    /// A directory or file could not be written.
    #[error("failed to write snapshot to {}", path.display())]
    Persistence {
        /// Destination that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The surface could not produce pixels.
    #[error("failed to render snapshot")]
    Render(#[source] SurfaceError),
}

impl SnapshotError {
    /// The error and its whole source chain on one line.
    pub fn report(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

impl From<SurfaceError> for SnapshotError {
    fn from(err: SurfaceError) -> Self {
        match err {
            SurfaceError::Encoding(source) => SnapshotError::Encoding(source),
            other => SnapshotError::Render(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_includes_sources() {
        let err = SnapshotError::BaselineMissing {
            path: PathBuf::from("/tmp/snapshots/X.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let report = err.report();
        assert!(report.contains("/tmp/snapshots/X.png"));
        assert!(report.contains("record the snapshot before asserting"));
        assert!(report.ends_with("no such file"));
    }

    #[test]
    fn test_surface_errors_map() {
        let err: SnapshotError = SurfaceError::EmptySurface {
            width: 0,
            height: 0,
        }
        .into();
        assert!(matches!(err, SnapshotError::Render(_)));
    }
}
