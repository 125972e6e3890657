//! Sheet presentation.
//!
//! A [`Sheet`] modifier reports its content as a [`Presentation`] while it
//! is presented. The hosting root calls [`present`] for each one, which
//! dims everything below and lays the content out on an elevated card.
//!
//! Card geometry follows the horizontal size class:
//!
//! - **Compact**: full width, starting just below the safe-area top,
//!   extending off the bottom edge
//! - **Regular**: a centered form sheet of at most 540x620

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use snapshot_specs::SizeClass;

use crate::environment::{to_i32, Environment};
use crate::layout::{centered, Constraints, LayoutNode};
use crate::paint::PaintCommand;
use crate::view::{Presentation, View};

/// Gap between the safe-area top and a compact sheet.
pub const SHEET_TOP_GAP: u32 = 10;

/// Corner radius of the card.
pub const SHEET_CORNER_RADIUS: u32 = 10;

/// Largest form sheet on regular-width displays.
pub const FORM_SHEET_SIZE: Size = Size::new(540, 620);

/// Presents `content` modally over `V` while `is_presented` holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet<V, S> {
    content: V,
    is_presented: bool,
    sheet: S,
}

impl<V, S> Sheet<V, S> {
    /// Attach a sheet to `content`.
    pub fn new(content: V, is_presented: bool, sheet: S) -> Self {
        Self {
            content,
            is_presented,
            sheet,
        }
    }

    /// Whether the sheet is showing.
    pub fn is_presented(&self) -> bool {
        self.is_presented
    }
}

impl<V: View, S: View> View for Sheet<V, S> {
    fn size_that_fits(&self, constraints: Constraints, env: &Environment) -> Size {
        self.content.size_that_fits(constraints, env)
    }

    fn layout(&self, bounds: Rectangle, env: &Environment) -> LayoutNode {
        self.content.layout(bounds, env)
    }

    fn preferred_title(&self) -> Option<&str> {
        self.content.preferred_title()
    }

    fn collect_presentations<'a>(&'a self, out: &mut Vec<Presentation<'a>>) {
        self.content.collect_presentations(out);
        if self.is_presented {
            out.push(Presentation {
                content: &self.sheet,
            });
            self.sheet.collect_presentations(out);
        }
    }
}

/// Card rectangle for a presentation in `env`.
pub fn card_frame(env: &Environment) -> Rectangle {
    let bounds = env.bounds;
    match env.traits.horizontal_size_class {
        SizeClass::Compact => {
            let top = env.safe_area.top.saturating_add(SHEET_TOP_GAP);
            Rectangle::new(
                bounds.top_left + Point::new(0, to_i32(top)),
                Size::new(bounds.size.width, bounds.size.height.saturating_sub(top)),
            )
        }
        SizeClass::Regular => centered(FORM_SHEET_SIZE, env.safe_bounds()),
    }
}

/// Lay out one presentation layer: a full-surface scrim and a card
/// holding `content` centered inside it.
pub fn present(content: &dyn View, env: &Environment) -> LayoutNode {
    let card = card_frame(env);
    let bottom_radius = match env.traits.horizontal_size_class {
        SizeClass::Compact => 0,
        SizeClass::Regular => SHEET_CORNER_RADIUS,
    };

    let fitted = content.size_that_fits(Constraints::loose(card.size), env);
    let card_node = LayoutNode::empty(card)
        .with_command(PaintCommand::RoundedFill {
            rect: card,
            top_radius: SHEET_CORNER_RADIUS,
            bottom_radius,
            color: env.palette.elevated_background,
        })
        .with_child(content.layout(centered(fitted, card), env));

    LayoutNode::empty(env.bounds)
        .with_command(PaintCommand::Dim {
            rect: env.bounds,
            color: env.palette.dimming,
            opacity: env.palette.dimming_opacity,
        })
        .with_child(card_node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Text;
    use crate::view::ViewExt;
    use snapshot_specs::{Appearance, DisplayConfiguration};

    #[test]
    fn test_hidden_sheet_not_collected() {
        let view = Text::new("base").sheet(false, Text::new("hidden"));
        let mut out = Vec::new();
        view.collect_presentations(&mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_nested_presentations_order() {
        let view = Text::new("base")
            .sheet(true, Text::new("first").sheet(true, Text::new("second")))
            .sheet(true, Text::new("third"));
        let mut out = Vec::new();
        view.collect_presentations(&mut out);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_hidden_sheet_hides_nested() {
        let view = Text::new("base").sheet(false, Text::new("a").sheet(true, Text::new("b")));
        let mut out = Vec::new();
        view.collect_presentations(&mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_compact_card_frame() {
        let env = Environment::new(&DisplayConfiguration::iphone_8(Appearance::Light));
        assert_eq!(
            card_frame(&env),
            Rectangle::new(Point::new(0, 30), Size::new(375, 637))
        );
    }

    #[test]
    fn test_regular_card_frame() {
        let env = Environment::new(&DisplayConfiguration::ipad_9_7(Appearance::Light));
        let card = card_frame(&env);
        assert_eq!(card.size, FORM_SHEET_SIZE);
        assert_eq!(card.top_left, Point::new(114, 20 + (1004 - 620) / 2));
    }

    #[test]
    fn test_present_dims_before_card() {
        let env = Environment::new(&DisplayConfiguration::iphone_8(Appearance::Dark));
        let list = present(&Text::new("on top"), &env).display_list();
        let kinds: Vec<_> = list
            .iter()
            .map(|cmd| match cmd {
                PaintCommand::Dim { .. } => "dim",
                PaintCommand::RoundedFill { .. } => "card",
                PaintCommand::Text { .. } => "text",
                PaintCommand::Fill { .. } => "fill",
            })
            .collect();
        assert_eq!(kinds, ["dim", "card", "text"]);
    }
}
