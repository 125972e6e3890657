//! Display list produced by the paint pass.
//!
//! Painting flattens a [`LayoutNode`](crate::LayoutNode) tree into an
//! ordered list of [`PaintCommand`]s. Later commands draw over earlier ones,
//! so the order is the z-order. A surface rasterizes the list in one go.

use embedded_graphics::mono_font::{ascii, MonoFont};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

/// Bitmap font used for text commands.
///
/// Variants map onto the fixed ASCII mono fonts of `embedded-graphics`, so
/// glyph rendering is identical on every host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    /// 7x13 regular
    Regular7x13,
    /// 8x13 regular
    Regular8x13,
    /// 9x15 regular
    Regular9x15,
    /// 10x20 regular
    Regular10x20,
    /// 7x13 bold
    Bold7x13,
    /// 8x13 bold
    Bold8x13,
    /// 9x15 bold
    Bold9x15,
    /// 9x18 bold
    Bold9x18,
}

impl Font {
    /// Underlying mono font.
    pub fn mono(self) -> &'static MonoFont<'static> {
        match self {
            Font::Regular7x13 => &ascii::FONT_7X13,
            Font::Regular8x13 => &ascii::FONT_8X13,
            Font::Regular9x15 => &ascii::FONT_9X15,
            Font::Regular10x20 => &ascii::FONT_10X20,
            Font::Bold7x13 => &ascii::FONT_7X13_BOLD,
            Font::Bold8x13 => &ascii::FONT_8X13_BOLD,
            Font::Bold9x15 => &ascii::FONT_9X15_BOLD,
            Font::Bold9x18 => &ascii::FONT_9X18_BOLD,
        }
    }

    /// Horizontal advance per character.
    pub fn advance(self) -> u32 {
        let font = self.mono();
        font.character_size.width + font.character_spacing
    }

    /// Height of one line of text.
    pub fn line_height(self) -> u32 {
        self.mono().character_size.height
    }

    /// Size of a single line of `chars` characters.
    pub fn line_size(self, chars: usize) -> Size {
        let chars = u32::try_from(chars).unwrap_or(u32::MAX);
        // Trailing spacing after the last glyph is not part of the run
        let width = self
            .advance()
            .saturating_mul(chars)
            .saturating_sub(if chars > 0 { self.mono().character_spacing } else { 0 });
        Size::new(width, self.line_height())
    }
}

/// One drawing operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaintCommand {
    /// Fill a rectangle with an opaque color.
    Fill {
        /// Area to fill
        rect: Rectangle,
        /// Fill color
        color: Rgb888,
    },
    /// Fill a rectangle with rounded corners.
    RoundedFill {
        /// Area to fill
        rect: Rectangle,
        /// Radius of the top-left and top-right corners
        top_radius: u32,
        /// Radius of the bottom-left and bottom-right corners
        bottom_radius: u32,
        /// Fill color
        color: Rgb888,
    },
    /// Blend a translucent color over everything drawn so far.
    Dim {
        /// Area to dim
        rect: Rectangle,
        /// Scrim color
        color: Rgb888,
        /// Opacity, 0 (clear) to 255 (opaque)
        opacity: u8,
    },
    /// Draw one line of text with its top-left corner at `origin`.
    Text {
        /// Top-left corner of the line
        origin: Point,
        /// Line content
        text: String,
        /// Glyph set
        font: Font,
        /// Glyph color
        color: Rgb888,
    },
}

impl PaintCommand {
    /// Area touched by the command.
    pub fn bounds(&self) -> Rectangle {
        match self {
            PaintCommand::Fill { rect, .. }
            | PaintCommand::RoundedFill { rect, .. }
            | PaintCommand::Dim { rect, .. } => *rect,
            PaintCommand::Text {
                origin, text, font, ..
            } => Rectangle::new(*origin, font.line_size(text.chars().count())),
        }
    }
}

/// Ordered paint commands for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayList {
    commands: Vec<PaintCommand>,
}

impl DisplayList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command on top of the existing ones.
    pub fn push(&mut self, command: PaintCommand) {
        self.commands.push(command);
    }

    /// Commands in paint order.
    pub fn iter(&self) -> impl Iterator<Item = &PaintCommand> {
        self.commands.iter()
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when nothing would be drawn.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text lines in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            PaintCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Index of the first text command with exactly this content.
    pub fn position_of_text(&self, needle: &str) -> Option<usize> {
        self.commands
            .iter()
            .position(|cmd| matches!(cmd, PaintCommand::Text { text, .. } if text == needle))
    }
}

impl<'a> IntoIterator for &'a DisplayList {
    type Item = &'a PaintCommand;
    type IntoIter = std::slice::Iter<'a, PaintCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_metrics() {
        assert_eq!(Font::Regular9x15.line_height(), 15);
        assert_eq!(Font::Regular9x15.advance(), 9);
        assert_eq!(Font::Regular9x15.line_size(5), Size::new(45, 15));
        assert_eq!(Font::Bold9x18.line_size(0), Size::new(0, 18));
    }

    #[test]
    fn test_text_bounds() {
        let cmd = PaintCommand::Text {
            origin: Point::new(10, 20),
            text: "abc".into(),
            font: Font::Regular8x13,
            color: Rgb888::new(0, 0, 0),
        };
        assert_eq!(
            cmd.bounds(),
            Rectangle::new(Point::new(10, 20), Size::new(24, 13))
        );
    }

    #[test]
    fn test_display_list_order() {
        let mut list = DisplayList::new();
        assert!(list.is_empty());
        list.push(PaintCommand::Fill {
            rect: Rectangle::new(Point::zero(), Size::new(4, 4)),
            color: Rgb888::new(1, 2, 3),
        });
        for text in ["first", "second"] {
            list.push(PaintCommand::Text {
                origin: Point::zero(),
                text: text.into(),
                font: Font::Regular7x13,
                color: Rgb888::new(0, 0, 0),
            });
        }
        assert_eq!(list.len(), 3);
        assert_eq!(list.texts().collect::<Vec<_>>(), ["first", "second"]);
        assert_eq!(list.position_of_text("second"), Some(2));
        assert_eq!(list.position_of_text("missing"), None);
    }
}
