use std::io;

use crate::types::{GameRecord, StandingRecord};

/// Position of the page on screen within its lap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub index: usize,
    pub count: usize,
}

impl PageInfo {
    /// "2/3", or empty when there is nothing to page through
    pub fn label(&self) -> String {
        if self.count == 0 {
            String::new()
        } else {
            format!("{}/{}", self.index + 1, self.count)
        }
    }
}

/// Display surface for one page of the dashboard
///
/// Implementations receive shared borrows of the cached records and must
/// cope with empty slices.
pub trait Renderer {
    fn render_games_page(&mut self, games: &[GameRecord], page: PageInfo) -> io::Result<()>;

    fn render_standings_page(
        &mut self,
        division: &str,
        standings: &[&StandingRecord],
        page: PageInfo,
    ) -> io::Result<()>;
}
