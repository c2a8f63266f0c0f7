/// Domain records shared by the data source, the cache, the rotation and the renderers
///
/// Records are produced by an `MlbDataProvider` and never mutated afterwards;
/// every refresh replaces a whole list.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of innings in a regulation game
pub const REGULATION_INNINGS: u8 = 9;

/// Coarse game status, as the scoreboard needs it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Preview,
    InProgress,
    /// `completed_innings` is the innings played when known; fewer than
    /// `REGULATION_INNINGS` marks a partial final
    Final { completed_innings: Option<u8> },
}

impl GameStatus {
    pub fn is_final(&self) -> bool {
        matches!(self, GameStatus::Final { .. })
    }

    pub fn is_partial_final(&self) -> bool {
        matches!(self, GameStatus::Final { completed_innings: Some(n) } if *n < REGULATION_INNINGS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InningHalf {
    Top,
    Middle,
    Bottom,
    End,
}

impl InningHalf {
    pub fn from_api(s: &str) -> Option<Self> {
        match s {
            "Top" => Some(Self::Top),
            "Middle" => Some(Self::Middle),
            "Bottom" => Some(Self::Bottom),
            "End" => Some(Self::End),
            _ => None,
        }
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            Self::Top => "T",
            Self::Middle => "Mid",
            Self::Bottom => "B",
            Self::End => "End",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Top => "▲",
            Self::Middle => "Mid",
            Self::Bottom => "▼",
            Self::End => "End",
        }
    }
}

/// Current inning of a live game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InningState {
    /// e.g. "5th"
    pub ordinal: String,
    pub half: Option<InningHalf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScore {
    pub id: u32,
    pub name: String,
    pub score: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_pk: u64,
    pub start_time: DateTime<Utc>,
    pub status: GameStatus,
    /// Source's detailed state ("Postponed", "Delayed: Rain", ...)
    pub detail: String,
    pub away: TeamScore,
    pub home: TeamScore,
    pub inning: Option<InningState>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRecord {
    pub team_id: u32,
    pub team_name: String,
    pub division: String,
    pub wins: u32,
    pub losses: u32,
    /// "-" for the division leader
    pub division_games_back: Option<String>,
    /// "+1.5" ahead of the last wild-card spot, "-" on it
    pub wild_card_games_back: Option<String>,
    pub streak: Option<String>,
    /// e.g. "6-4"
    pub last_ten: Option<String>,
}

impl StandingRecord {
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses
    }

    pub fn winning_pct(&self) -> f64 {
        match self.games_played() {
            0 => 0.0,
            gp => self.wins as f64 / gp as f64,
        }
    }

    pub fn leads_division(&self) -> bool {
        matches!(self.division_games_back.as_deref(), Some("-") | Some("0.0"))
    }
}

/// Numeric value of a games-back figure, negative when ahead ("+2.0")
pub fn games_back_value(gb: Option<&str>) -> f64 {
    match gb {
        None => f64::INFINITY,
        Some("-") => 0.0,
        Some(s) => match s.strip_prefix('+') {
            Some(ahead) => -ahead.parse::<f64>().unwrap_or(0.0),
            None => s.parse::<f64>().unwrap_or(f64::INFINITY),
        },
    }
}

/// Baseball winning percentage: ".583", "1.000"
pub fn format_pct(pct: f64) -> String {
    if pct >= 1.0 {
        "1.000".to_string()
    } else {
        format!("{:.3}", pct).trim_start_matches('0').to_string()
    }
}
