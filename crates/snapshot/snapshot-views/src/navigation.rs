//! Navigation container and title preference.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::environment::{to_i32, Environment};
use crate::layout::{centered, Constraints, LayoutNode};
use crate::paint::PaintCommand;
use crate::text::{Text, TextStyle};
use crate::view::{Presentation, View};

/// Height of the (empty) navigation bar.
pub const NAVIGATION_BAR_HEIGHT: u32 = 44;

/// Height of the large-title area below the bar.
pub const LARGE_TITLE_HEIGHT: u32 = 52;

/// Hosts content under a navigation bar with a large title.
///
/// The title comes from the first [`View::preferred_title`] in the content.
/// A navigation view takes all the space it is offered and paints it with
/// the background colour; the content is centered in what remains under the
/// title area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationView<V> {
    content: V,
}

impl<V: View> NavigationView<V> {
    /// Wrap `content` in a navigation container.
    pub fn new(content: V) -> Self {
        Self { content }
    }

    fn content_area(bounds: Rectangle) -> Rectangle {
        let header = NAVIGATION_BAR_HEIGHT + LARGE_TITLE_HEIGHT;
        Rectangle::new(
            bounds.top_left + Point::new(0, to_i32(header)),
            Size::new(
                bounds.size.width,
                bounds.size.height.saturating_sub(header),
            ),
        )
    }

    fn layout_title(&self, title: &str, bounds: Rectangle, env: &Environment) -> LayoutNode {
        let margins = env.layout_margins;
        let text = Text::new(title).style(TextStyle::LargeTitle);
        let available = bounds.size.width.saturating_sub(margins.horizontal());
        let size = text.size_that_fits(
            Constraints::loose(Size::new(available, LARGE_TITLE_HEIGHT)),
            env,
        );
        let x = if env.is_right_to_left() {
            bounds.top_left.x + to_i32(bounds.size.width.saturating_sub(margins.right + size.width))
        } else {
            bounds.top_left.x + to_i32(margins.left)
        };
        // Hangs below the bar with at most 8px of air
        let slack = LARGE_TITLE_HEIGHT.saturating_sub(size.height);
        let y = bounds.top_left.y + to_i32(NAVIGATION_BAR_HEIGHT + slack.min(8));
        text.layout(Rectangle::new(Point::new(x, y), size), env)
    }
}

impl<V: View> View for NavigationView<V> {
    fn size_that_fits(&self, constraints: Constraints, _env: &Environment) -> Size {
        constraints.max
    }

    fn layout(&self, bounds: Rectangle, env: &Environment) -> LayoutNode {
        let area = Self::content_area(bounds);
        let fitted = self.content.size_that_fits(Constraints::loose(area.size), env);
        let mut node = LayoutNode::empty(bounds).with_command(PaintCommand::Fill {
            rect: bounds,
            color: env.palette.background,
        });
        if let Some(title) = self.content.preferred_title() {
            node.children.push(self.layout_title(title, bounds, env));
        }
        node.children
            .push(self.content.layout(centered(fitted, area), env));
        node
    }

    // The title stops here: outer containers never see it.

    fn collect_presentations<'a>(&'a self, out: &mut Vec<Presentation<'a>>) {
        self.content.collect_presentations(out);
    }
}

/// Attaches a navigation title preference to a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTitle<V> {
    content: V,
    title: String,
}

impl<V> NavigationTitle<V> {
    /// Attach `title` to `content`.
    pub fn new(content: V, title: impl Into<String>) -> Self {
        Self {
            content,
            title: title.into(),
        }
    }
}

impl<V: View> View for NavigationTitle<V> {
    fn size_that_fits(&self, constraints: Constraints, env: &Environment) -> Size {
        self.content.size_that_fits(constraints, env)
    }

    fn layout(&self, bounds: Rectangle, env: &Environment) -> LayoutNode {
        self.content.layout(bounds, env)
    }

    fn preferred_title(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn collect_presentations<'a>(&'a self, out: &mut Vec<Presentation<'a>>) {
        self.content.collect_presentations(out);
    }
}
