//! The [`View`] trait and its extension methods.

use embedded_graphics::prelude::Size;
use embedded_graphics::primitives::Rectangle;
use snapshot_specs::EdgeInsets;

use crate::containers::Padding;
use crate::environment::Environment;
use crate::layout::{Constraints, LayoutNode};
use crate::navigation::NavigationTitle;
use crate::sheet::Sheet;

/// A node of a declarative view hierarchy.
///
/// Views are plain values. Hosting a view never mutates it: layout reads
/// the view and the [`Environment`] and produces a [`LayoutNode`] tree.
pub trait View {
    /// Size the view wants within `constraints`.
    fn size_that_fits(&self, constraints: Constraints, env: &Environment) -> Size;

    /// Place the view (and its children) in `bounds`.
    fn layout(&self, bounds: Rectangle, env: &Environment) -> LayoutNode;

    /// Title this view asks an enclosing navigation container to show.
    fn preferred_title(&self) -> Option<&str> {
        None
    }

    /// Report modal content this view currently presents, outermost first.
    fn collect_presentations<'a>(&'a self, _out: &mut Vec<Presentation<'a>>) {}
}

/// Modal content requested by a view in the hierarchy.
#[derive(Clone, Copy)]
pub struct Presentation<'a> {
    /// View shown in the presented card
    pub content: &'a dyn View,
}

impl std::fmt::Debug for Presentation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Presentation").finish_non_exhaustive()
    }
}

/// Type-erased view that can be handed to another thread's window.
pub type AnyView = Box<dyn View + Send>;

impl<V: View + ?Sized> View for Box<V> {
    fn size_that_fits(&self, constraints: Constraints, env: &Environment) -> Size {
        (**self).size_that_fits(constraints, env)
    }

    fn layout(&self, bounds: Rectangle, env: &Environment) -> LayoutNode {
        (**self).layout(bounds, env)
    }

    fn preferred_title(&self) -> Option<&str> {
        (**self).preferred_title()
    }

    fn collect_presentations<'a>(&'a self, out: &mut Vec<Presentation<'a>>) {
        (**self).collect_presentations(out);
    }
}

/// Modifiers available on every view.
pub trait ViewExt: View + Sized {
    /// Inset the view by `insets`.
    fn padding(self, insets: EdgeInsets) -> Padding<Self> {
        Padding::new(insets, self)
    }

    /// Inset the view by the same amount on every edge.
    fn padding_all(self, amount: u32) -> Padding<Self> {
        self.padding(EdgeInsets::all(amount))
    }

    /// Title shown by the nearest enclosing [`NavigationView`](crate::NavigationView).
    fn navigation_title(self, title: impl Into<String>) -> NavigationTitle<Self> {
        NavigationTitle::new(self, title)
    }

    /// Present `content` as a sheet over the whole hierarchy while
    /// `is_presented` holds.
    fn sheet<S: View>(self, is_presented: bool, content: S) -> Sheet<Self, S> {
        Sheet::new(self, is_presented, content)
    }

    /// Erase the concrete type.
    fn boxed(self) -> AnyView
    where
        Self: Send + 'static,
    {
        Box::new(self)
    }
}

impl<V: View> ViewExt for V {}
