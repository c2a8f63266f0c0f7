/// Widget-based rendering for the dashboard pages
///
/// Widgets render themselves directly to a ratatui Buffer, so each one can be
/// tested against a plain test buffer without a terminal.

#[cfg(test)]
pub mod testing;

pub mod section_header;
pub use section_header::render_section_header;

pub mod games_table;
pub use games_table::GamesTable;

pub mod standings_table;
pub use standings_table::StandingsTable;

pub mod status_bar;
pub use status_bar::StatusBar;

use ratatui::{buffer::Buffer, layout::Rect};

use crate::config::ThemeConfig;

/// Core trait for renderable widgets
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }
}
