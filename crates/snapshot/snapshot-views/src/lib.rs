//! Snapshot Views
//!
//! A small composable view tree in the spirit of declarative UI toolkits,
//! built so that one layout pass and one paint pass produce a flat display
//! list that a surface can rasterize.
//!
//! # Architecture
//!
//! - [`View`]: size negotiation, layout into a [`LayoutNode`] tree, and the
//!   two preferences that flow up the tree (navigation title, presentations)
//! - [`Environment`]: resolved traits, insets and [`Palette`] for one capture
//! - Views: [`Text`], [`VStack`], [`Padding`], [`NavigationView`]
//! - Modifiers: [`NavigationTitle`], [`Sheet`] via [`ViewExt`]
//! - Paint: [`LayoutNode::paint`] flattens into a [`DisplayList`]
//!
//! # Example
//!
//! ```
//! use snapshot_views::prelude::*;
//! use snapshot_specs::{Appearance, DisplayConfiguration};
//!
//! let view = NavigationView::new(
//!     Text::new("Hello, World!")
//!         .navigation_title("Welcome")
//!         .sheet(true, Text::new("I should be on top")),
//! );
//!
//! let env = Environment::new(&DisplayConfiguration::iphone_8(Appearance::Light));
//! let tree = layout_root(&view, &env);
//! let mut list = DisplayList::new();
//! tree.paint(&mut list);
//! assert!(list.texts().any(|t| t == "I should be on top"));
//! ```

pub mod containers;
pub mod environment;
pub mod layout;
pub mod navigation;
pub mod paint;
pub mod sheet;
pub mod text;
pub mod view;

pub use containers::{Padding, VStack};
pub use environment::{ColorRole, Environment, Palette};
pub use layout::{centered, layout_root, Constraints, LayoutNode};
pub use navigation::{NavigationTitle, NavigationView};
pub use paint::{DisplayList, Font, PaintCommand};
pub use sheet::{present, Sheet};
pub use text::{Text, TextStyle};
pub use view::{AnyView, Presentation, View, ViewExt};

pub mod prelude {
    //! Everything needed to build and lay out a view tree.
    pub use crate::containers::*;
    pub use crate::environment::*;
    pub use crate::layout::{centered, layout_root, Constraints, LayoutNode};
    pub use crate::navigation::*;
    pub use crate::paint::*;
    pub use crate::sheet::*;
    pub use crate::text::*;
    pub use crate::view::*;
}
