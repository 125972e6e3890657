//! Render surface errors

use std::path::PathBuf;

/// Failure to produce or export pixels.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// The configuration describes a surface with no pixels.
    #[error("display configuration has an empty surface ({width}x{height})")]
    EmptySurface {
        /// Configured width
        width: u32,
        /// Configured height
        height: u32,
    },

    /// PNG encoding failed.
    #[error("failed to encode bitmap as PNG")]
    Encoding(#[from] image::ImageError),

    /// Writing an exported bitmap failed.
    #[error("failed to write {path}")]
    Io {
        /// Destination that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
