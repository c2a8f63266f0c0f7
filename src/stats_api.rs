/// HTTP client for the public MLB Stats API
///
/// Only the two endpoints the dashboard needs are covered: today's schedule
/// with linescores, and regular season standings for both leagues.
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::data_provider::MlbDataProvider;
use crate::error::FetchError;
use crate::team_abbrev::{division_name, AMERICAN_LEAGUE_ID, NATIONAL_LEAGUE_ID};
use crate::types::{GameRecord, GameStatus, InningHalf, InningState, StandingRecord, TeamScore};

pub const DEFAULT_BASE_URL: &str = "https://statsapi.mlb.com";

/// Per-request timeout; a slower response counts as a failed fetch
const REQUEST_TIMEOUT_SECS: u64 = 10;

const MLB_SPORT_ID: u32 = 1;

pub struct StatsApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl StatsApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Games scheduled on `date`
    pub async fn games_on(&self, date: NaiveDate) -> Result<Vec<GameRecord>, FetchError> {
        let query = [
            ("sportId", MLB_SPORT_ID.to_string()),
            ("date", date.format("%Y-%m-%d").to_string()),
            ("hydrate", "linescore".to_string()),
        ];
        let response: ScheduleResponse = self.get_json("/api/v1/schedule", &query).await?;
        Ok(games_from_schedule(response))
    }

    /// Regular season standings of both leagues for `season`
    pub async fn standings_for(&self, season: i32) -> Result<Vec<StandingRecord>, FetchError> {
        let query = [
            ("leagueId", format!("{},{}", AMERICAN_LEAGUE_ID, NATIONAL_LEAGUE_ID)),
            ("season", season.to_string()),
            ("standingsTypes", "regularSeason".to_string()),
        ];
        let response: StandingsResponse = self.get_json("/api/v1/standings", &query).await?;
        Ok(standings_from_response(response))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("HTTP: GET {} {:?}", url, query);

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl MlbDataProvider for StatsApiClient {
    async fn todays_games(&self) -> Result<Vec<GameRecord>, FetchError> {
        self.games_on(Local::now().date_naive()).await
    }

    async fn current_standings(&self) -> Result<Vec<StandingRecord>, FetchError> {
        self.standings_for(Local::now().year()).await
    }
}

// Wire format

#[derive(Debug, Deserialize)]
struct ScheduleResponse {
    #[serde(default)]
    dates: Vec<ScheduleDate>,
}

#[derive(Debug, Deserialize)]
struct ScheduleDate {
    #[serde(default)]
    games: Vec<ScheduleGame>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleGame {
    game_pk: u64,
    game_date: DateTime<Utc>,
    status: ApiStatus,
    teams: ApiMatchup,
    #[serde(default)]
    linescore: Option<ApiLinescore>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiStatus {
    abstract_game_state: String,
    #[serde(default)]
    detailed_state: String,
}

#[derive(Debug, Deserialize)]
struct ApiMatchup {
    away: ApiSide,
    home: ApiSide,
}

#[derive(Debug, Deserialize)]
struct ApiSide {
    team: ApiTeam,
    #[serde(default)]
    score: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ApiTeam {
    id: u32,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiLinescore {
    current_inning: Option<u8>,
    current_inning_ordinal: Option<String>,
    inning_state: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StandingsResponse {
    #[serde(default)]
    records: Vec<DivisionRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DivisionRecord {
    division: ApiRef,
    #[serde(default)]
    team_records: Vec<TeamRecord>,
}

#[derive(Debug, Deserialize)]
struct ApiRef {
    id: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TeamRecord {
    team: ApiTeam,
    wins: u32,
    losses: u32,
    #[serde(default)]
    games_back: Option<String>,
    #[serde(default)]
    wild_card_games_back: Option<String>,
    #[serde(default)]
    streak: Option<ApiStreak>,
    #[serde(default)]
    records: Option<ApiSplits>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiStreak {
    streak_code: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiSplits {
    #[serde(default)]
    split_records: Vec<ApiSplit>,
}

#[derive(Debug, Deserialize)]
struct ApiSplit {
    #[serde(rename = "type")]
    kind: String,
    wins: u32,
    losses: u32,
}

// Conversion into domain records

fn games_from_schedule(response: ScheduleResponse) -> Vec<GameRecord> {
    response
        .dates
        .into_iter()
        .flat_map(|date| date.games)
        .map(game_record)
        .collect()
}

fn game_record(game: ScheduleGame) -> GameRecord {
    let linescore = game.linescore;
    let status = match game.status.abstract_game_state.as_str() {
        "Live" => GameStatus::InProgress,
        "Final" => GameStatus::Final {
            completed_innings: linescore.as_ref().and_then(|l| l.current_inning),
        },
        _ => GameStatus::Preview,
    };

    let inning = match (&status, linescore) {
        (GameStatus::InProgress, Some(l)) => l.current_inning_ordinal.map(|ordinal| InningState {
            ordinal,
            half: l.inning_state.as_deref().and_then(InningHalf::from_api),
        }),
        _ => None,
    };

    GameRecord {
        game_pk: game.game_pk,
        start_time: game.game_date,
        status,
        detail: game.status.detailed_state,
        away: team_score(game.teams.away),
        home: team_score(game.teams.home),
        inning,
    }
}

fn team_score(side: ApiSide) -> TeamScore {
    TeamScore {
        id: side.team.id,
        name: side.team.name,
        score: side.score,
    }
}

fn standings_from_response(response: StandingsResponse) -> Vec<StandingRecord> {
    let mut standings = Vec::new();
    for record in response.records {
        let division = match division_name(record.division.id) {
            Some(name) => name.to_string(),
            None => format!("Division {}", record.division.id),
        };
        for team in record.team_records {
            let last_ten = team.records.as_ref().and_then(|r| {
                r.split_records
                    .iter()
                    .find(|s| s.kind == "lastTen")
                    .map(|s| format!("{}-{}", s.wins, s.losses))
            });
            standings.push(StandingRecord {
                team_id: team.team.id,
                team_name: team.team.name,
                division: division.clone(),
                wins: team.wins,
                losses: team.losses,
                division_games_back: team.games_back,
                wild_card_games_back: team.wild_card_games_back,
                streak: team.streak.and_then(|s| s.streak_code),
                last_ten,
            });
        }
    }
    standings
}

/// Parse a raw schedule payload
pub fn parse_schedule(body: &[u8]) -> Result<Vec<GameRecord>, FetchError> {
    let response: ScheduleResponse = serde_json::from_slice(body)?;
    Ok(games_from_schedule(response))
}

/// Parse a raw standings payload
pub fn parse_standings(body: &[u8]) -> Result<Vec<StandingRecord>, FetchError> {
    let response: StandingsResponse = serde_json::from_slice(body)?;
    Ok(standings_from_response(response))
}
