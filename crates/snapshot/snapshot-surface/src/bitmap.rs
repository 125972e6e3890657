//! Captured pixels and PNG export.

use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, ImageFormat};

use crate::error::SurfaceError;

/// An RGBA8 image, row-major, alpha always opaque.
///
/// Two bitmaps of the same view under the same configuration are equal, and
/// so are their PNG encodings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bitmap {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Bitmap {
    /// Wrap an RGBA buffer. Returns `None` unless `rgba` holds exactly
    /// `width * height` pixels.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        let expected = u64::from(width) * u64::from(height) * 4;
        (u64::try_from(rgba.len()).ok() == Some(expected)).then(|| Self::from_rgba(width, height, rgba))
    }

    pub(crate) fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self {
            width,
            height,
            rgba,
        }
    }

    /// Decode a PNG (any color type) into an RGBA bitmap.
    pub fn from_png(bytes: &[u8]) -> Result<Self, SurfaceError> {
        let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)?.to_rgba8();
        Ok(Self::from_rgba(
            image.width(),
            image.height(),
            image.into_raw(),
        ))
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn as_rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// RGBA value at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = usize::try_from((u64::from(y) * u64::from(self.width) + u64::from(x)) * 4).ok()?;
        let px = self.rgba.get(offset..offset.checked_add(4)?)?;
        <[u8; 4]>::try_from(px).ok()
    }

    /// Number of pixels that differ from `other`, or `None` when the
    /// dimensions differ.
    pub fn diff_count(&self, other: &Bitmap) -> Option<usize> {
        if self.width != other.width || self.height != other.height {
            return None;
        }
        Some(
            self.rgba
                .chunks_exact(4)
                .zip(other.rgba.chunks_exact(4))
                .filter(|(a, b)| a != b)
                .count(),
        )
    }

    /// Encode as PNG.
    ///
    /// Compression and filter are fixed, and no metadata chunks are written,
    /// so identical bitmaps always produce identical bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>, SurfaceError> {
        let mut bytes = Vec::new();
        PngEncoder::new_with_quality(&mut bytes, CompressionType::Best, FilterType::Adaptive)
            .write_image(&self.rgba, self.width, self.height, ExtendedColorType::Rgba8)?;
        Ok(bytes)
    }

    /// Encode as PNG and write to `path`, creating parent directories.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), SurfaceError> {
        let path = path.as_ref();
        let bytes = self.encode_png()?;
        let io = |source| SurfaceError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io)?;
        }
        std::fs::write(path, bytes).map_err(io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(width: u32, height: u32) -> Bitmap {
        let mut rgba = Vec::new();
        for y in 0..height {
            for x in 0..width {
                let v = if (x + y) % 2 == 0 { 0 } else { 255 };
                rgba.extend_from_slice(&[v, v, 128, 255]);
            }
        }
        Bitmap::new(width, height, rgba).unwrap()
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        assert!(Bitmap::new(2, 2, vec![0; 15]).is_none());
        assert!(Bitmap::new(2, 2, vec![0; 16]).is_some());
        assert!(Bitmap::new(0, 0, Vec::new()).is_some());
    }

    #[test]
    fn test_pixel_access() {
        let bitmap = checker(3, 2);
        assert_eq!(bitmap.pixel(0, 0), Some([0, 0, 128, 255]));
        assert_eq!(bitmap.pixel(1, 0), Some([255, 255, 128, 255]));
        assert_eq!(bitmap.pixel(3, 0), None);
        assert_eq!(bitmap.pixel(0, 2), None);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let a = checker(17, 9).encode_png().unwrap();
        let b = checker(17, 9).encode_png().unwrap();
        assert_eq!(a, b);
        assert!(a.starts_with(b"\x89PNG\r\n\x1a\n"));
    }

    #[test]
    fn test_png_is_lossless() {
        let original = checker(8, 5);
        let decoded = Bitmap::from_png(&original.encode_png().unwrap()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_from_png_rejects_garbage() {
        assert!(matches!(
            Bitmap::from_png(b"not a png"),
            Err(SurfaceError::Encoding(_))
        ));
    }

    #[test]
    fn test_diff_count() {
        let a = checker(4, 4);
        let mut rgba = a.as_rgba().to_vec();
        rgba[0] = 1;
        let b = Bitmap::new(4, 4, rgba).unwrap();
        assert_eq!(a.diff_count(&a), Some(0));
        assert_eq!(a.diff_count(&b), Some(1));
        assert_eq!(a.diff_count(&checker(4, 3)), None);
    }

    #[test]
    fn test_save_png_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.png");
        checker(3, 3).save_png(&path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), checker(3, 3).encode_png().unwrap());
    }
}
