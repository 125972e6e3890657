//! Container views for layout composition
//!
//! - [`VStack`] - Vertical stack, children centered horizontally
//! - [`Padding`] - Insets a single child
//!
//! # Example
//!
//! ```
//! use snapshot_views::prelude::*;
//!
//! let stack = VStack::new()
//!     .gap(8)
//!     .child(Text::new("Title").style(TextStyle::Headline))
//!     .child(Text::new("Body").padding_all(4));
//! assert_eq!(stack.len(), 2);
//! ```

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use snapshot_specs::EdgeInsets;

use crate::environment::{inset, to_i32, Environment};
use crate::layout::{Constraints, LayoutNode};
use crate::view::{AnyView, Presentation, View};

/// Vertical stack of children, top to bottom.
///
/// Each child gets its fitted size and is centered horizontally within the
/// stack. The stack is as wide as its widest child.
#[derive(Default)]
pub struct VStack {
    children: Vec<AnyView>,
    gap: u32,
}

impl VStack {
    /// Create an empty stack with no gap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gap between children.
    #[must_use]
    pub fn gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, child: impl View + Send + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True when the stack has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn total_gap(&self) -> u32 {
        let gaps = u32::try_from(self.children.len().saturating_sub(1)).unwrap_or(u32::MAX);
        self.gap.saturating_mul(gaps)
    }

    /// Sizes of each child, proposing the remaining height in order.
    fn child_sizes(&self, max: Size, env: &Environment) -> Vec<Size> {
        let mut remaining = max.height.saturating_sub(self.total_gap());
        self.children
            .iter()
            .map(|child| {
                let size =
                    child.size_that_fits(Constraints::loose(Size::new(max.width, remaining)), env);
                remaining = remaining.saturating_sub(size.height);
                size
            })
            .collect()
    }
}

impl std::fmt::Debug for VStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VStack")
            .field("children", &self.children.len())
            .field("gap", &self.gap)
            .finish()
    }
}

impl View for VStack {
    fn size_that_fits(&self, constraints: Constraints, env: &Environment) -> Size {
        let sizes = self.child_sizes(constraints.max, env);
        let width = sizes.iter().map(|s| s.width).max().unwrap_or(0);
        let height = sizes
            .iter()
            .fold(self.total_gap(), |acc, s| acc.saturating_add(s.height));
        constraints.constrain(Size::new(width, height))
    }

    fn layout(&self, bounds: Rectangle, env: &Environment) -> LayoutNode {
        let sizes = self.child_sizes(bounds.size, env);
        let mut node = LayoutNode::empty(bounds);
        let mut y = bounds.top_left.y;
        for (child, size) in self.children.iter().zip(sizes) {
            let width = size.width.min(bounds.size.width);
            let x = bounds.top_left.x + to_i32((bounds.size.width - width) / 2);
            let frame = Rectangle::new(Point::new(x, y), Size::new(width, size.height));
            node.children.push(child.layout(frame, env));
            y = y
                .saturating_add(to_i32(size.height))
                .saturating_add(to_i32(self.gap));
        }
        node
    }

    fn preferred_title(&self) -> Option<&str> {
        self.children.iter().find_map(|c| c.preferred_title())
    }

    fn collect_presentations<'a>(&'a self, out: &mut Vec<Presentation<'a>>) {
        for child in &self.children {
            child.collect_presentations(out);
        }
    }
}

/// Insets a child view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Padding<V> {
    insets: EdgeInsets,
    content: V,
}

impl<V> Padding<V> {
    /// Wrap `content` with `insets`.
    pub fn new(insets: EdgeInsets, content: V) -> Self {
        Self { insets, content }
    }

    /// The insets applied.
    pub fn insets(&self) -> EdgeInsets {
        self.insets
    }
}

impl<V: View> View for Padding<V> {
    fn size_that_fits(&self, constraints: Constraints, env: &Environment) -> Size {
        let extra = Size::new(self.insets.horizontal(), self.insets.vertical());
        let inner = self.content.size_that_fits(constraints.deflate(extra), env);
        constraints.constrain(inner.saturating_add(extra))
    }

    fn layout(&self, bounds: Rectangle, env: &Environment) -> LayoutNode {
        let content = self.content.layout(inset(bounds, self.insets), env);
        LayoutNode::empty(bounds).with_child(content)
    }

    fn preferred_title(&self) -> Option<&str> {
        self.content.preferred_title()
    }

    fn collect_presentations<'a>(&'a self, out: &mut Vec<Presentation<'a>>) {
        self.content.collect_presentations(out);
    }
}
