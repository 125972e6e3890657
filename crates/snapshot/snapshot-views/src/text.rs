//! Static text.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use snapshot_specs::ContentSizeCategory;

use crate::environment::{to_i32, ColorRole, Environment};
use crate::layout::{Constraints, LayoutNode};
use crate::paint::{Font, PaintCommand};
use crate::view::View;

/// Typographic role of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextStyle {
    /// Navigation titles
    LargeTitle,
    /// Emphasized body text
    Headline,
    /// Regular text
    #[default]
    Body,
}

impl TextStyle {
    /// Font for this style at a content size category.
    pub const fn font(self, content_size: ContentSizeCategory) -> Font {
        use ContentSizeCategory::*;
        match (self, content_size) {
            (TextStyle::Body, Small) => Font::Regular7x13,
            (TextStyle::Body, Medium) => Font::Regular8x13,
            (TextStyle::Body, Large) => Font::Regular9x15,
            (TextStyle::Body, ExtraLarge) => Font::Regular10x20,
            (TextStyle::Headline, Small) => Font::Bold7x13,
            (TextStyle::Headline, Medium) => Font::Bold8x13,
            (TextStyle::Headline, Large) => Font::Bold9x15,
            (TextStyle::Headline, ExtraLarge) => Font::Bold9x18,
            (TextStyle::LargeTitle, Small) => Font::Bold9x15,
            (TextStyle::LargeTitle, Medium) => Font::Bold9x18,
            (TextStyle::LargeTitle, Large | ExtraLarge) => Font::Regular10x20,
        }
    }
}

/// Text that wraps at word boundaries to the width it is offered.
///
/// Lines are aligned to the leading edge, which is the right edge when the
/// layout direction is right-to-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    content: String,
    style: TextStyle,
    role: ColorRole,
}

impl Text {
    /// Body text in the primary label color.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: TextStyle::Body,
            role: ColorRole::Label,
        }
    }

    /// Change the typographic style.
    #[must_use]
    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Change the color role.
    #[must_use]
    pub fn foreground(mut self, role: ColorRole) -> Self {
        self.role = role;
        self
    }

    /// The text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    fn font(&self, env: &Environment) -> Font {
        self.style.font(env.traits.content_size)
    }
}

impl View for Text {
    fn size_that_fits(&self, constraints: Constraints, env: &Environment) -> Size {
        let font = self.font(env);
        let lines = wrap(&self.content, max_chars(constraints.max.width, font));
        constraints.constrain(block_size(&lines, font))
    }

    fn layout(&self, bounds: Rectangle, env: &Environment) -> LayoutNode {
        let font = self.font(env);
        let color = env.palette.color(self.role);
        let rtl = env.is_right_to_left();
        let line_height = to_i32(font.line_height());

        let mut node = LayoutNode::empty(bounds);
        let mut y = bounds.top_left.y;
        for line in wrap(&self.content, max_chars(bounds.size.width, font)) {
            let width = font.line_size(line.chars().count()).width;
            let x = if rtl {
                let slack = bounds.size.width.saturating_sub(width);
                bounds.top_left.x.saturating_add(to_i32(slack))
            } else {
                bounds.top_left.x
            };
            node.commands.push(PaintCommand::Text {
                origin: Point::new(x, y),
                text: line,
                font,
                color,
            });
            y = y.saturating_add(line_height);
        }
        node
    }
}

fn max_chars(width: u32, font: Font) -> usize {
    let chars = (width + font.mono().character_spacing) / font.advance().max(1);
    usize::try_from(chars.max(1)).unwrap_or(usize::MAX)
}

fn block_size(lines: &[String], font: Font) -> Size {
    let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let count = u32::try_from(lines.len()).unwrap_or(u32::MAX);
    Size::new(
        font.line_size(widest).width,
        font.line_height().saturating_mul(count),
    )
}

/// Greedy word wrap into lines of at most `max_chars` characters.
///
/// Explicit newlines always break. Words longer than a line are split.
pub(crate) fn wrap(content: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    if content.is_empty() {
        return lines;
    }
    for paragraph in content.split('\n') {
        let mut line = String::new();
        let mut line_len = 0usize;
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            // Break words that can never fit on one line
            while word.len() > max_chars {
                if line_len > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                let rest = word.split_off(max_chars);
                lines.push(word.into_iter().collect());
                word = rest;
            }
            let needed = if line_len == 0 { word.len() } else { line_len + 1 + word.len() };
            if needed > max_chars && line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.extend(word.iter());
            line_len += word.len();
        }
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use snapshot_specs::{Appearance, DisplayConfiguration, LayoutDirection, Traits};

    fn env() -> Environment {
        Environment::new(&DisplayConfiguration::iphone_8(Appearance::Light))
    }

    #[test]
    fn test_wrap_greedy() {
        assert_eq!(wrap("Hello, world!", 20), ["Hello, world!"]);
        assert_eq!(wrap("Hello, world!", 8), ["Hello,", "world!"]);
        assert_eq!(wrap("one two three", 7), ["one two", "three"]);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap("abcdefgh ij", 3), ["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn test_wrap_keeps_newlines() {
        assert_eq!(wrap("a\n\nb", 10), ["a", "", "b"]);
        assert!(wrap("", 10).is_empty());
    }

    #[test]
    fn test_font_follows_content_size() {
        // iPhone 8 preset uses the medium content size
        let env = env();
        assert_eq!(Text::new("x").font(&env), Font::Regular8x13);
        assert_eq!(
            Text::new("x").style(TextStyle::LargeTitle).font(&env),
            Font::Bold9x18
        );
    }

    #[test]
    fn test_size_single_line() {
        let size = Text::new("Hello, world!")
            .size_that_fits(Constraints::loose(Size::new(375, 647)), &env());
        assert_eq!(size, Size::new(13 * 8, 13));
    }

    #[test]
    fn test_size_wraps_to_width() {
        let size = Text::new("Hello, world!")
            .size_that_fits(Constraints::loose(Size::new(60, 647)), &env());
        assert_eq!(size, Size::new(6 * 8, 26));
    }

    #[test]
    fn test_layout_leading_alignment() {
        let bounds = Rectangle::new(Point::new(10, 10), Size::new(200, 40));
        let node = Text::new("Hi").layout(bounds, &env());
        assert_eq!(node.find_text("Hi").map(|r| r.top_left), Some(Point::new(10, 10)));
    }

    #[test]
    fn test_layout_rtl_alignment() {
        let config = DisplayConfiguration::iphone_8(Appearance::Light)
            .with_traits(Traits::EMPTY.with_layout_direction(LayoutDirection::RightToLeft));
        let env = Environment::new(&config);
        let bounds = Rectangle::new(Point::new(10, 10), Size::new(200, 40));
        let node = Text::new("Hi").layout(bounds, &env);
        assert_eq!(
            node.find_text("Hi").map(|r| r.top_left),
            Some(Point::new(10 + 200 - 16, 10))
        );
    }

    #[test]
    fn test_color_role() {
        let env = env();
        let node = Text::new("x")
            .foreground(ColorRole::Accent)
            .layout(Rectangle::new(Point::zero(), Size::new(50, 50)), &env);
        assert!(matches!(
            node.commands.first(),
            Some(PaintCommand::Text { color, .. }) if *color == env.palette.accent
        ));
    }

    proptest! {
        #[test]
        fn prop_wrapped_lines_fit(text in "[a-z ]{0,80}", width in 1usize..30) {
            for line in wrap(&text, width) {
                prop_assert!(line.chars().count() <= width);
            }
        }

        #[test]
        fn prop_wrap_preserves_words(text in "[a-z]{1,6}( [a-z]{1,6}){0,10}", width in 6usize..30) {
            let joined = wrap(&text, width).join(" ");
            prop_assert_eq!(joined, text);
        }
    }
}
