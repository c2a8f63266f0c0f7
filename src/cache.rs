use std::sync::Arc;

use crate::types::{GameRecord, StandingRecord};

/// Latest games and standings lists
///
/// Each list is swapped as a whole `Arc`, so a reader holding the old list
/// keeps a complete copy and never observes a partial update.
#[derive(Debug, Clone, Default)]
pub struct SnapshotCache {
    games: Arc<Vec<GameRecord>>,
    standings: Arc<Vec<StandingRecord>>,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn games(&self) -> Arc<Vec<GameRecord>> {
        Arc::clone(&self.games)
    }

    pub fn standings(&self) -> Arc<Vec<StandingRecord>> {
        Arc::clone(&self.standings)
    }

    /// Borrow the current games list
    pub fn game_list(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn standing_list(&self) -> &[StandingRecord] {
        &self.standings
    }

    pub fn set_games(&mut self, games: Vec<GameRecord>) {
        self.games = Arc::new(games);
    }

    pub fn set_standings(&mut self, standings: Vec<StandingRecord>) {
        self.standings = Arc::new(standings);
    }
}
