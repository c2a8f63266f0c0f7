/// Trait for providing MLB data, abstracting over the HTTP client and mock implementations
use async_trait::async_trait;

use crate::error::FetchError;
use crate::types::{GameRecord, StandingRecord};

/// The two kinds of data the dashboard keeps fresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchKind {
    Games,
    Standings,
}

impl FetchKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Games => "games",
            Self::Standings => "standings",
        }
    }
}

/// Source of games and standings, implemented by `StatsApiClient` and `MockClient`
#[async_trait]
pub trait MlbDataProvider: Send + Sync {
    /// Today's games in the viewer's local date, in source order.
    /// A day without games is an empty list, not an error.
    async fn todays_games(&self) -> Result<Vec<GameRecord>, FetchError>;

    /// Current season standings for every division, unordered
    async fn current_standings(&self) -> Result<Vec<StandingRecord>, FetchError>;
}
