/// GamesTable widget - one row per game: status, away team and score, home team and score
///
/// Live games are drawn in the theme's live color. An empty page shows a
/// single "No games today" line.
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::config::ThemeConfig;
use crate::formatting::format_game_row;
use crate::tui::widgets::RenderableWidget;
use crate::types::{GameRecord, GameStatus};

pub const NO_GAMES_TEXT: &str = "No games today";

#[derive(Debug)]
pub struct GamesTable<'a> {
    pub games: &'a [GameRecord],
    /// chrono format for start times
    pub time_format: &'a str,
}

impl<'a> GamesTable<'a> {
    pub fn new(games: &'a [GameRecord], time_format: &'a str) -> Self {
        Self { games, time_format }
    }

    fn row_style(&self, game: &GameRecord, theme: &ThemeConfig) -> Style {
        match game.status {
            GameStatus::InProgress => Style::default().fg(theme.live_fg),
            _ => Style::default(),
        }
    }
}

impl RenderableWidget for GamesTable<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        if area.height == 0 {
            return;
        }

        if self.games.is_empty() {
            buf.set_string(area.x, area.y, NO_GAMES_TEXT, Style::default());
            return;
        }

        let box_chars = theme.box_chars();
        for (game, y) in self.games.iter().zip(area.y..area.bottom()) {
            let row = format_game_row(game, self.time_format, &box_chars, theme.use_unicode);
            buf.set_string(area.x, y, &row, self.row_style(game, theme));
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(self.games.len().max(1) as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::tui::widgets::testing::*;

    #[test]
    fn test_renders_rows_in_order() {
        let games = fixtures::create_mock_games(2);
        let widget = GamesTable::new(&games, "%H:%M");
        let buf = render_widget(&widget, 32, 3);

        assert_buffer(
            &buf,
            &[
                "F          │ NYY   0 │ BAL   3",
                "▲ 5th      │ BOS   1 │ TB    4",
                "",
            ],
        );
    }

    #[test]
    fn test_live_rows_use_live_color() {
        let games = fixtures::create_mock_games(2);
        let widget = GamesTable::new(&games, "%H:%M");
        let theme = test_theme();
        let buf = render_widget(&widget, 32, 2);

        assert_eq!(buf[(0, 1)].fg, theme.live_fg);
        assert_ne!(buf[(0, 0)].fg, theme.live_fg);
    }

    #[test]
    fn test_ascii_theme() {
        let games = fixtures::create_mock_games(2);
        let widget = GamesTable::new(&games, "%H:%M");
        let buf = render_widget_with_theme(&widget, 32, 2, &test_theme_ascii());

        assert_buffer(
            &buf,
            &[
                "F          | NYY   0 | BAL   3",
                "T 5th      | BOS   1 | TB    4",
            ],
        );
    }

    #[test]
    fn test_empty_page() {
        let widget = GamesTable::new(&[], "%H:%M");
        let buf = render_widget(&widget, 20, 2);
        assert_buffer(&buf, &[NO_GAMES_TEXT, ""]);
        assert_eq!(widget.preferred_height(), Some(1));
    }

    #[test]
    fn test_rows_clipped_to_area() {
        let games = fixtures::create_mock_games(5);
        let widget = GamesTable::new(&games, "%H:%M");
        let buf = render_widget(&widget, 32, 2);
        assert_eq!(buffer_lines(&buf).len(), 2);
        assert!(buffer_lines(&buf)[1].contains("BOS"));
    }
}
