use std::io;

use ratatui::{
    backend::Backend,
    layout::{Constraint, Layout, Rect},
    Terminal,
};

use crate::config::ThemeConfig;
use crate::renderer::{PageInfo, Renderer};
use crate::tui::widgets::{
    render_section_header, GamesTable, RenderableWidget, StandingsTable, StatusBar,
};
use crate::types::{GameRecord, StandingRecord};

pub const GAMES_TITLE: &str = "Scores";
pub const STANDINGS_TITLE: &str = "Standings";

/// Renderer that draws full-screen pages on a ratatui terminal
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    theme: ThemeConfig,
    time_format: String,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>, theme: ThemeConfig, time_format: impl Into<String>) -> Self {
        Self {
            terminal,
            theme,
            time_format: time_format.into(),
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

/// Title, page body and status bar
fn page_layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .areas(area)
}

/// Status bar text: "Games 2/3", or just the name when there is nothing to page
fn page_text(name: &str, page: PageInfo) -> String {
    match page.label() {
        label if label.is_empty() => name.to_string(),
        label => format!("{} {}", name, label),
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn render_games_page(&mut self, games: &[GameRecord], page: PageInfo) -> io::Result<()> {
        let theme = &self.theme;
        let time_format = self.time_format.as_str();

        self.terminal.draw(|frame| {
            let [title, body, status] = page_layout(frame.area());
            let buf = frame.buffer_mut();
            render_section_header(GAMES_TITLE, false, title, title.y, buf, theme);
            GamesTable::new(games, time_format).render(body, buf, theme);
            StatusBar::new(page_text("Games", page)).render(status, buf, theme);
        })?;
        Ok(())
    }

    fn render_standings_page(
        &mut self,
        division: &str,
        standings: &[&StandingRecord],
        page: PageInfo,
    ) -> io::Result<()> {
        let theme = &self.theme;

        self.terminal.draw(|frame| {
            let [title, body, status] = page_layout(frame.area());
            let buf = frame.buffer_mut();
            render_section_header(STANDINGS_TITLE, false, title, title.y, buf, theme);
            StandingsTable::new(division, standings).render(body, buf, theme);
            StatusBar::new(page_text(division, page)).render(status, buf, theme);
        })?;
        Ok(())
    }
}
