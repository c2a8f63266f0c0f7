//! Test doubles for the data source and the display surface

use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::data_provider::MlbDataProvider;
use crate::error::FetchError;
use crate::renderer::{PageInfo, Renderer};
use crate::types::{GameRecord, StandingRecord};

type Script<T> = Mutex<VecDeque<Result<Vec<T>, FetchError>>>;

/// Provider that answers from a fixed script, then fails with HTTP 503
#[derive(Default)]
pub struct ScriptedProvider {
    games: Script<GameRecord>,
    standings: Script<StandingRecord>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_games(self, script: Vec<Result<Vec<GameRecord>, FetchError>>) -> Self {
        Self {
            games: Mutex::new(script.into()),
            ..self
        }
    }

    pub fn with_standings(self, script: Vec<Result<Vec<StandingRecord>, FetchError>>) -> Self {
        Self {
            standings: Mutex::new(script.into()),
            ..self
        }
    }
}

fn next<T>(script: &Script<T>, url: &str) -> Result<Vec<T>, FetchError> {
    script
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| Err(unavailable(url)))
}

/// The error a down stats service produces
pub fn unavailable(url: &str) -> FetchError {
    FetchError::Status {
        status: 503,
        url: url.to_string(),
    }
}

#[async_trait]
impl MlbDataProvider for ScriptedProvider {
    async fn todays_games(&self) -> Result<Vec<GameRecord>, FetchError> {
        next(&self.games, "/api/v1/schedule")
    }

    async fn current_standings(&self) -> Result<Vec<StandingRecord>, FetchError> {
        next(&self.standings, "/api/v1/standings")
    }
}

/// One page handed to a `RecordingRenderer`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Games { page: PageInfo, games: usize },
    Standings { division: String, teams: usize },
}

/// Renderer that remembers what it was asked to draw
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<Frame>,
    /// Fail every call when set
    pub fail: bool,
}

impl RecordingRenderer {
    fn check(&self) -> io::Result<()> {
        if self.fail {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "display gone"))
        } else {
            Ok(())
        }
    }
}

impl Renderer for RecordingRenderer {
    fn render_games_page(&mut self, games: &[GameRecord], page: PageInfo) -> io::Result<()> {
        self.frames.push(Frame::Games {
            page,
            games: games.len(),
        });
        self.check()
    }

    fn render_standings_page(
        &mut self,
        division: &str,
        standings: &[&StandingRecord],
        _page: PageInfo,
    ) -> io::Result<()> {
        self.frames.push(Frame::Standings {
            division: division.to_string(),
            teams: standings.len(),
        });
        self.check()
    }
}
