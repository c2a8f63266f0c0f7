use std::io::{self, Write};

use crate::config::Config;
use crate::formatting::{
    format_game_row, format_header, format_standing_row, format_standings_header,
    standings_row_width, BoxChars,
};
use crate::renderer::{PageInfo, Renderer};
use crate::types::{GameRecord, StandingRecord};

/// Renderer that writes pages as plain text, for one-shot commands
pub struct TextRenderer<W: Write> {
    out: W,
    box_chars: BoxChars,
    use_unicode: bool,
    time_format: String,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, config: &Config) -> Self {
        Self {
            out,
            box_chars: config.theme.box_chars(),
            use_unicode: config.theme.use_unicode,
            time_format: config.time_format.clone(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn title_with_page(title: &str, page: PageInfo) -> String {
    if page.count > 1 {
        format!("{} ({})", title, page.label())
    } else {
        title.to_string()
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render_games_page(&mut self, games: &[GameRecord], page: PageInfo) -> io::Result<()> {
        let title = title_with_page("Scores", page);
        write!(self.out, "{}", format_header(&title, true, &self.box_chars))?;

        if games.is_empty() {
            writeln!(self.out, "No games today")?;
        }
        for game in games {
            writeln!(
                self.out,
                "{}",
                format_game_row(game, &self.time_format, &self.box_chars, self.use_unicode)
            )?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    fn render_standings_page(
        &mut self,
        division: &str,
        standings: &[&StandingRecord],
        _page: PageInfo,
    ) -> io::Result<()> {
        write!(self.out, "{}", format_header(division, true, &self.box_chars))?;
        writeln!(self.out, "{}", format_standings_header())?;
        writeln!(self.out, "{}", self.box_chars.horizontal.repeat(standings_row_width()))?;
        for record in standings {
            writeln!(self.out, "{}", format_standing_row(record))?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeConfig;
    use crate::fixtures;

    fn ascii_config() -> Config {
        Config {
            theme: ThemeConfig {
                use_unicode: false,
                ..ThemeConfig::default()
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_games_page_text() {
        let mut renderer = TextRenderer::new(Vec::new(), &ascii_config());
        let games = fixtures::create_mock_games(1);
        renderer
            .render_games_page(&games, PageInfo { index: 0, count: 1 })
            .unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text, "Scores\n======\nF          | NYY   0 | BAL   3\n\n");
    }

    #[test]
    fn test_paged_title() {
        let mut renderer = TextRenderer::new(Vec::new(), &ascii_config());
        renderer
            .render_games_page(&[], PageInfo { index: 1, count: 3 })
            .unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.starts_with("Scores (2/3)\n============\nNo games today\n"));
    }

    #[test]
    fn test_standings_page_text() {
        let mut renderer = TextRenderer::new(Vec::new(), &ascii_config());
        let standings = fixtures::create_mock_standings();
        let teams: Vec<&StandingRecord> = standings.iter().take(1).collect();
        renderer
            .render_standings_page("AL East", &teams, PageInfo { index: 0, count: 8 })
            .unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "AL East");
        assert_eq!(lines[1], "=======");
        assert_eq!(lines[2], format_standings_header());
        assert_eq!(lines[3], "-".repeat(standings_row_width()));
        assert_eq!(lines[4], "NYY    62  38  .620     -         W3  7-3");
    }
}
