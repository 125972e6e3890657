//! Layout primitives and the root layout pass.
//!
//! Layout is two-phase, like a box-constraint system:
//!
//! 1. **Size pass (up)**: a parent offers [`Constraints`] and the child
//!    answers with the size it wants ([`View::size_that_fits`]).
//! 2. **Placement pass (down)**: the parent hands each child a final
//!    rectangle and the child returns a [`LayoutNode`] subtree.
//!
//! [`layout_root`] runs both passes for a whole hierarchy, including any
//! presentations the hierarchy requests, and returns a tree ready to paint.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::environment::{to_i32, Environment};
use crate::paint::{DisplayList, PaintCommand};
use crate::sheet::present;
use crate::view::View;

/// Range of sizes a parent accepts from a child.
///
/// # Invariants
///
/// `min <= max` on both axes. Constructors clamp `min` to keep it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    /// Minimum allowed size (inclusive).
    pub min: Size,
    /// Maximum allowed size (inclusive).
    pub max: Size,
}

impl Constraints {
    /// Create constraints from explicit bounds.
    pub fn new(min: Size, max: Size) -> Self {
        Self {
            min: Size::new(min.width.min(max.width), min.height.min(max.height)),
            max,
        }
    }

    /// Exactly `size`.
    pub fn tight(size: Size) -> Self {
        Self {
            min: size,
            max: size,
        }
    }

    /// Anything from zero up to `max`.
    pub fn loose(max: Size) -> Self {
        Self {
            min: Size::zero(),
            max,
        }
    }

    /// Clamp `size` into the allowed range.
    ///
    /// ```rust
    /// use snapshot_views::layout::Constraints;
    /// use embedded_graphics::prelude::Size;
    ///
    /// let c = Constraints::new(Size::new(50, 25), Size::new(200, 100));
    /// assert_eq!(c.constrain(Size::new(10, 300)), Size::new(50, 100));
    /// ```
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min.width, self.max.width),
            size.height.clamp(self.min.height, self.max.height),
        )
    }

    /// True when only one size is allowed.
    pub fn is_tight(&self) -> bool {
        self.min == self.max
    }

    /// Shrink both bounds by `amount`, saturating at zero.
    pub fn deflate(&self, amount: Size) -> Self {
        Self {
            min: self.min.saturating_sub(amount),
            max: self.max.saturating_sub(amount),
        }
    }
}

/// A laid-out view: its frame, what it paints, and its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutNode {
    /// Rectangle assigned to the view, in surface coordinates
    pub frame: Rectangle,
    /// Commands painted before any child
    pub commands: Vec<PaintCommand>,
    /// Child subtrees, painted in order
    pub children: Vec<LayoutNode>,
}

impl LayoutNode {
    /// Node that paints nothing and has no children.
    pub fn empty(frame: Rectangle) -> Self {
        Self {
            frame,
            commands: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add a paint command.
    #[must_use]
    pub fn with_command(mut self, command: PaintCommand) -> Self {
        self.commands.push(command);
        self
    }

    /// Add a child subtree.
    #[must_use]
    pub fn with_child(mut self, child: LayoutNode) -> Self {
        self.children.push(child);
        self
    }

    /// Flatten into `list`: own commands, then children depth-first.
    pub fn paint(&self, list: &mut DisplayList) {
        for command in &self.commands {
            list.push(command.clone());
        }
        for child in &self.children {
            child.paint(list);
        }
    }

    /// Paint into a fresh display list.
    pub fn display_list(&self) -> DisplayList {
        let mut list = DisplayList::new();
        self.paint(&mut list);
        list
    }

    /// Number of nodes in the subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(LayoutNode::node_count).sum::<usize>()
    }

    /// Bounds of the first text line with exactly this content.
    pub fn find_text(&self, needle: &str) -> Option<Rectangle> {
        let own = self.commands.iter().find_map(|cmd| match cmd {
            PaintCommand::Text { text, .. } if text == needle => Some(cmd.bounds()),
            _ => None,
        });
        own.or_else(|| self.children.iter().find_map(|c| c.find_text(needle)))
    }
}

/// Rectangle of `size` centered in `within`, clamped to fit.
pub fn centered(size: Size, within: Rectangle) -> Rectangle {
    let size = Size::new(
        size.width.min(within.size.width),
        size.height.min(within.size.height),
    );
    let dx = (within.size.width - size.width) / 2;
    let dy = (within.size.height - size.height) / 2;
    Rectangle::new(
        within.top_left + Point::new(to_i32(dx), to_i32(dy)),
        size,
    )
}

/// Lay out a hosted view hierarchy on the full surface.
///
/// The root fills the background, the view is sized against the safe area
/// and centered in it, then every active presentation is stacked on top in
/// the order the hierarchy reported them.
pub fn layout_root(view: &dyn View, env: &Environment) -> LayoutNode {
    let safe = env.safe_bounds();
    let fitted = view.size_that_fits(Constraints::loose(safe.size), env);
    let content = view.layout(centered(fitted, safe), env);

    let mut root = LayoutNode::empty(env.bounds)
        .with_command(PaintCommand::Fill {
            rect: env.bounds,
            color: env.palette.background,
        })
        .with_child(content);

    let mut presentations = Vec::new();
    view.collect_presentations(&mut presentations);
    for presentation in presentations {
        root.children.push(present(presentation.content, env));
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::Rgb888;

    #[test]
    fn test_constraints_new_clamps_min() {
        let c = Constraints::new(Size::new(300, 10), Size::new(200, 100));
        assert_eq!(c.min, Size::new(200, 10));
        assert!(!c.is_tight());
        assert!(Constraints::tight(Size::new(4, 4)).is_tight());
    }

    #[test]
    fn test_deflate_saturates() {
        let c = Constraints::loose(Size::new(10, 10)).deflate(Size::new(20, 4));
        assert_eq!(c.max, Size::new(0, 6));
    }

    #[test]
    fn test_centered() {
        let within = Rectangle::new(Point::new(0, 20), Size::new(375, 647));
        let rect = centered(Size::new(75, 47), within);
        assert_eq!(rect.top_left, Point::new(150, 320));
        assert_eq!(rect.size, Size::new(75, 47));
    }

    #[test]
    fn test_centered_clamps_oversize() {
        let within = Rectangle::new(Point::new(5, 5), Size::new(10, 10));
        assert_eq!(centered(Size::new(40, 40), within), within);
    }

    #[test]
    fn test_paint_is_preorder() {
        let text = |s: &str| PaintCommand::Text {
            origin: Point::zero(),
            text: s.into(),
            font: crate::paint::Font::Regular7x13,
            color: Rgb888::new(0, 0, 0),
        };
        let rect = Rectangle::new(Point::zero(), Size::new(1, 1));
        let tree = LayoutNode::empty(rect)
            .with_command(text("root"))
            .with_child(LayoutNode::empty(rect).with_command(text("a")).with_child(
                LayoutNode::empty(rect).with_command(text("a1")),
            ))
            .with_child(LayoutNode::empty(rect).with_command(text("b")));

        let list = tree.display_list();
        assert_eq!(list.texts().collect::<Vec<_>>(), ["root", "a", "a1", "b"]);
        assert_eq!(tree.node_count(), 4);
        assert!(tree.find_text("a1").is_some());
        assert!(tree.find_text("c").is_none());
    }
}
