/// StandingsTable widget - one division (or wild-card race) of the standings
///
/// Layout: division name with a double rule, the column header, a single
/// rule, then one row per team in the order given.
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::config::ThemeConfig;
use crate::formatting::{format_standing_row, format_standings_header, standings_row_width};
use crate::tui::widgets::{render_section_header, RenderableWidget};
use crate::types::StandingRecord;

/// Header rows above the first team: title, title rule, column header, rule
const HEADER_HEIGHT: u16 = 4;

#[derive(Debug)]
pub struct StandingsTable<'a> {
    pub division: &'a str,
    pub teams: &'a [&'a StandingRecord],
}

impl<'a> StandingsTable<'a> {
    pub fn new(division: &'a str, teams: &'a [&'a StandingRecord]) -> Self {
        Self { division, teams }
    }
}

impl RenderableWidget for StandingsTable<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        let mut y = area.y;
        y += render_section_header(self.division, true, area, y, buf, theme);

        if y < area.bottom() {
            buf.set_string(area.x, y, format_standings_header(), Style::default());
            y += 1;
        }

        if y < area.bottom() {
            let rule = theme.box_chars().horizontal.repeat(standings_row_width());
            buf.set_string(area.x, y, &rule, Style::default());
            y += 1;
        }

        for (team, row_y) in self.teams.iter().zip(y..area.bottom()) {
            buf.set_string(area.x, row_y, format_standing_row(team), Style::default());
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(HEADER_HEIGHT + self.teams.len() as u16)
    }
}
