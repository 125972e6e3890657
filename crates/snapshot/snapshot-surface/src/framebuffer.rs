//! CPU framebuffer the display list is rasterized into.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::prelude::{Dimensions, DrawTarget, OriginDimensions, Pixel, Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::bitmap::Bitmap;

/// Row-major RGB framebuffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pixels: Vec<Rgb888>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    /// Create a framebuffer filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgb888) -> Self {
        let len = usize::try_from(u64::from(width) * u64::from(height)).unwrap_or(0);
        Self {
            pixels: vec![background; len],
            width,
            height,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            usize::try_from(u64::from(y) * u64::from(self.width) + u64::from(x)).ok()
        } else {
            None
        }
    }

    /// Set pixel at coordinates. Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb888) {
        if let Some(slot) = self.index(x, y).and_then(|i| self.pixels.get_mut(i)) {
            *slot = color;
        }
    }

    /// Get pixel at coordinates.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb888> {
        self.index(x, y).and_then(|i| self.pixels.get(i)).copied()
    }

    /// Fill the whole framebuffer.
    pub fn fill(&mut self, color: Rgb888) {
        self.pixels.fill(color);
    }

    /// Blend `color` at `opacity` over the pixels inside `rect`.
    ///
    /// Uses integer arithmetic with rounding so results are identical on
    /// every platform.
    pub fn blend_rect(&mut self, rect: Rectangle, color: Rgb888, opacity: u8) {
        let Some(area) = self.clip(rect) else {
            return;
        };
        let alpha = u32::from(opacity);
        for y in area.top_left.y..area.top_left.y + to_i32(area.size.height) {
            for x in area.top_left.x..area.top_left.x + to_i32(area.size.width) {
                let (Ok(px), Ok(py)) = (u32::try_from(x), u32::try_from(y)) else {
                    continue;
                };
                if let Some(under) = self.get_pixel(px, py) {
                    self.set_pixel(px, py, blend(under, color, alpha));
                }
            }
        }
    }

    /// Intersection of `rect` with the framebuffer, if any.
    fn clip(&self, rect: Rectangle) -> Option<Rectangle> {
        let area = rect.intersection(&self.bounding_box());
        (area.size.width > 0 && area.size.height > 0).then_some(area)
    }

    /// Copy out as an opaque RGBA bitmap.
    pub fn to_bitmap(&self) -> Bitmap {
        let mut rgba = Vec::with_capacity(self.pixels.len().saturating_mul(4));
        for px in &self.pixels {
            rgba.extend_from_slice(&[px.r(), px.g(), px.b(), u8::MAX]);
        }
        Bitmap::from_rgba(self.width, self.height, rgba)
    }
}

fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// `under * (1 - a) + over * a` per channel, rounded.
fn blend(under: Rgb888, over: Rgb888, alpha: u32) -> Rgb888 {
    let mix = |u: u8, o: u8| -> u8 {
        let value = (u32::from(u) * (255 - alpha) + u32::from(o) * alpha + 127) / 255;
        u8::try_from(value).unwrap_or(u8::MAX)
    };
    Rgb888::new(
        mix(under.r(), over.r()),
        mix(under.g(), over.g()),
        mix(under.b(), over.b()),
    )
}

impl DrawTarget for Framebuffer {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
