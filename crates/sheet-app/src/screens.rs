//! Screens

use snapshot_views::prelude::*;

/// Text shown by the app's root sheet.
pub const ROOT_SHEET_TEXT: &str = "It's a sheet";

/// The app's main content.
pub fn content_view() -> impl View + Send + 'static {
    Text::new("Hello, world!").padding_all(16)
}

/// Navigation screen titled "Welcome" that presents `sheet_text` in a sheet.
pub fn presenting_sheet_view(sheet_text: &str) -> impl View + Send + 'static {
    NavigationView::new(
        Text::new("Hello, World!")
            .navigation_title("Welcome")
            .sheet(true, Text::new(sheet_text)),
    )
}
