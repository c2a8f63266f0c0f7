/// Dashboard state, the actions that change it, and the page it currently shows
///
/// All state changes go through `reduce`: fetch results replace a cached list
/// and reset the rotation, rotation ticks advance it. Nothing else mutates the
/// cache or the rotation.
use std::io;
use std::num::NonZeroUsize;

use tracing::{debug, info};

use crate::cache::SnapshotCache;
use crate::config::DEFAULT_GAMES_PER_PAGE;
use crate::renderer::{PageInfo, Renderer};
use crate::rotation::{RotationStateMachine, ViewMode};
use crate::team_abbrev::{league_of_division, Grouping, GroupingKind, DIVISIONS};
use crate::types::{games_back_value, GameRecord, StandingRecord};

#[derive(Debug, Clone)]
pub enum Action {
    /// A games refresh succeeded
    GamesLoaded(Vec<GameRecord>),
    /// A standings refresh succeeded
    StandingsLoaded(Vec<StandingRecord>),
    /// The page timer fired
    RotationTick,
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    pub cache: SnapshotCache,
    pub rotation: RotationStateMachine,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(DEFAULT_GAMES_PER_PAGE).unwrap_or(NonZeroUsize::MIN))
    }
}

impl DashboardState {
    pub fn new(games_per_page: NonZeroUsize) -> Self {
        let division_count = NonZeroUsize::new(DIVISIONS.len()).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: SnapshotCache::new(),
            rotation: RotationStateMachine::new(games_per_page, division_count),
        }
    }

    /// The page to put on screen for the current state
    pub fn view(&self) -> View<'_> {
        let rotation = self.rotation.state();
        match rotation.mode {
            ViewMode::ShowingGames => {
                let games = self.cache.game_list();
                View::Games {
                    games: &games[self.rotation.game_page_range(games.len())],
                    page: PageInfo {
                        index: rotation.game_page,
                        count: self.rotation.page_count(games.len()),
                    },
                }
            }
            ViewMode::ShowingStandings => {
                let grouping = &DIVISIONS[rotation.division_page % DIVISIONS.len()];
                View::Standings {
                    grouping,
                    standings: select_standings(grouping, self.cache.standing_list()),
                    page: PageInfo {
                        index: rotation.division_page,
                        count: self.rotation.division_count(),
                    },
                }
            }
        }
    }
}

/// What the renderer is asked to draw
#[derive(Debug)]
pub enum View<'a> {
    Games {
        games: &'a [GameRecord],
        page: PageInfo,
    },
    Standings {
        grouping: &'static Grouping,
        standings: Vec<&'a StandingRecord>,
        page: PageInfo,
    },
}

/// Apply one action to the state
///
/// Each action is applied on its own, in the order received.
pub fn reduce(state: DashboardState, action: Action) -> DashboardState {
    let mut new_state = state;

    match action {
        Action::GamesLoaded(games) => {
            info!("DATA: Loaded {} games", games.len());
            new_state.cache.set_games(games);
            new_state.rotation.games_arrived();
        }
        Action::StandingsLoaded(standings) => {
            info!("DATA: Loaded {} standings", standings.len());
            new_state.cache.set_standings(standings);
            new_state.rotation.standings_arrived();
        }
        Action::RotationTick => {
            let games_len = new_state.cache.game_list().len();
            new_state.rotation.tick(games_len);
        }
    }

    new_state
}

/// Records shown on a standings page, best first
///
/// Division pages order by winning percentage. Wild-card pages list the
/// league's non division leaders ordered by wild-card games back.
pub fn select_standings<'a>(
    grouping: &Grouping,
    standings: &'a [StandingRecord],
) -> Vec<&'a StandingRecord> {
    let mut selected: Vec<&StandingRecord> = match grouping.kind {
        GroupingKind::Division(_) => standings
            .iter()
            .filter(|s| s.division == grouping.name)
            .collect(),
        GroupingKind::WildCard(league) => standings
            .iter()
            .filter(|s| league_of_division(&s.division) == Some(league) && !s.leads_division())
            .collect(),
    };

    match grouping.kind {
        GroupingKind::Division(_) => {
            selected.sort_by(|a, b| b.winning_pct().total_cmp(&a.winning_pct()));
        }
        GroupingKind::WildCard(_) => {
            selected.sort_by(|a, b| {
                games_back_value(a.wild_card_games_back.as_deref())
                    .total_cmp(&games_back_value(b.wild_card_games_back.as_deref()))
                    .then_with(|| b.winning_pct().total_cmp(&a.winning_pct()))
            });
        }
    }

    selected
}

/// Hand the current view to a renderer
pub fn present<R: Renderer + ?Sized>(state: &DashboardState, renderer: &mut R) -> io::Result<()> {
    match state.view() {
        View::Games { games, page } => {
            debug!("RENDER: games page {} ({} games)", page.label(), games.len());
            renderer.render_games_page(games, page)
        }
        View::Standings { grouping, standings, page } => {
            debug!("RENDER: {} ({} teams)", grouping.name, standings.len());
            renderer.render_standings_page(grouping.name, &standings, page)
        }
    }
}
