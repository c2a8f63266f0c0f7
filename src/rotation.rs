/// Self-driving pagination over today's games and the standings groupings
///
/// The machine only moves on a rotation tick or when a fresh list arrives.
/// It never looks at the records themselves, only at how many games there are.
use std::num::NonZeroUsize;
use std::ops::Range;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    ShowingGames,
    ShowingStandings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RotationState {
    pub mode: ViewMode,
    pub game_page: usize,
    pub division_page: usize,
}

#[derive(Debug, Clone)]
pub struct RotationStateMachine {
    state: RotationState,
    games_per_page: NonZeroUsize,
    division_count: NonZeroUsize,
}

impl RotationStateMachine {
    pub fn new(games_per_page: NonZeroUsize, division_count: NonZeroUsize) -> Self {
        Self {
            state: RotationState::default(),
            games_per_page,
            division_count,
        }
    }

    /// Resume from a known state
    pub fn with_state(
        state: RotationState,
        games_per_page: NonZeroUsize,
        division_count: NonZeroUsize,
    ) -> Self {
        debug_assert!(state.division_page < division_count.get());
        Self {
            state,
            games_per_page,
            division_count,
        }
    }

    pub fn state(&self) -> RotationState {
        self.state
    }

    pub fn games_per_page(&self) -> usize {
        self.games_per_page.get()
    }

    pub fn division_count(&self) -> usize {
        self.division_count.get()
    }

    /// Number of game pages for `games_len` games; zero when there are none
    pub fn page_count(&self, games_len: usize) -> usize {
        games_len.div_ceil(self.games_per_page.get())
    }

    /// Indices of the games shown on the current page
    pub fn game_page_range(&self, games_len: usize) -> Range<usize> {
        let per_page = self.games_per_page.get();
        let start = (self.state.game_page * per_page).min(games_len);
        let end = (start + per_page).min(games_len);
        start..end
    }

    /// Advance one page, switching view mode at the end of a lap
    pub fn tick(&mut self, games_len: usize) {
        let before = self.state;
        match self.state.mode {
            ViewMode::ShowingGames => {
                if games_len <= self.games_per_page.get() {
                    // A single page never wraps, so hand over immediately
                    self.state.game_page = 0;
                    self.state.mode = ViewMode::ShowingStandings;
                } else {
                    let pages = self.page_count(games_len);
                    self.state.game_page = (self.state.game_page + 1) % pages;
                    if self.state.game_page == 0 {
                        self.state.mode = ViewMode::ShowingStandings;
                    }
                }
            }
            ViewMode::ShowingStandings => {
                let divisions = self.division_count.get();
                self.state.division_page = (self.state.division_page + 1) % divisions;
                if self.state.division_page == 0 {
                    self.state.mode = ViewMode::ShowingGames;
                }
            }
        }
        debug!("ROTATION: tick ({} games) {:?} -> {:?}", games_len, before, self.state);
    }

    /// A new games list restarts the games tour from the first page
    pub fn games_arrived(&mut self) {
        self.state.game_page = 0;
        self.state.mode = ViewMode::ShowingGames;
        debug!("ROTATION: games arrived, reset to {:?}", self.state);
    }

    /// A new standings list restarts the division tour, without switching mode
    pub fn standings_arrived(&mut self) {
        self.state.division_page = 0;
        debug!("ROTATION: standings arrived, reset to {:?}", self.state);
    }
}
