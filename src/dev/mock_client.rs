/// Mock MLB client for development and testing
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use tracing::info;

use crate::data_provider::MlbDataProvider;
use crate::error::FetchError;
use crate::fixtures;
use crate::types::{GameRecord, GameStatus, StandingRecord};

/// Games on a mock slate; enough for three pages at the default page size
pub const MOCK_GAME_COUNT: usize = 20;

/// Mock client that returns fixture data instead of making real API calls
///
/// Live games gain a run for the away side on every refresh so the
/// dashboard visibly changes.
pub struct MockClient {
    game_count: usize,
    refreshes: AtomicU32,
}

impl MockClient {
    /// Create a new mock client
    pub fn new() -> Self {
        Self::with_game_count(MOCK_GAME_COUNT)
    }

    pub fn with_game_count(game_count: usize) -> Self {
        info!("Creating MockClient for development mode ({} games)", game_count);
        Self {
            game_count,
            refreshes: AtomicU32::new(0),
        }
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

fn advance_live_games(games: &mut [GameRecord], runs: u32) {
    for game in games.iter_mut().filter(|g| g.status == GameStatus::InProgress) {
        if let Some(score) = game.away.score.as_mut() {
            *score += runs;
        }
    }
}

#[async_trait]
impl MlbDataProvider for MockClient {
    async fn todays_games(&self) -> Result<Vec<GameRecord>, FetchError> {
        let refresh = self.refreshes.fetch_add(1, Ordering::Relaxed);
        info!("MockClient: Returning {} mock games (refresh {})", self.game_count, refresh);
        let mut games = fixtures::create_mock_games(self.game_count);
        advance_live_games(&mut games, refresh);
        Ok(games)
    }

    async fn current_standings(&self) -> Result<Vec<StandingRecord>, FetchError> {
        info!("MockClient: Returning mock standings");
        Ok(fixtures::create_mock_standings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_games_advance_between_refreshes() {
        let client = MockClient::with_game_count(4);
        let first = client.todays_games().await.unwrap();
        let second = client.todays_games().await.unwrap();

        assert_eq!(first.len(), 4);
        assert_eq!(second[1].away.score, first[1].away.score.map(|s| s + 1));
        assert_eq!(second[0], first[0]);
    }

    #[tokio::test]
    async fn test_mock_standings() {
        let standings = MockClient::new().current_standings().await.unwrap();
        assert_eq!(standings.len(), 30);
    }
}
