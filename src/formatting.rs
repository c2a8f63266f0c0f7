use chrono::Local;
use unicode_width::UnicodeWidthStr;

use crate::team_abbrev::display_abbrev;
use crate::types::{format_pct, GameRecord, GameStatus, StandingRecord};

/// Box-drawing characters for headers and table rules
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Format a header with text and an underline of the same display width
pub fn format_header(text: &str, double_line: bool, box_chars: &BoxChars) -> String {
    let separator_char = if double_line {
        &box_chars.double_horizontal
    } else {
        &box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.width()))
}

/// Width of the status column of a games row
pub const STATUS_COL_WIDTH: usize = 10;
/// Width of a team abbreviation column
pub const ABBREV_COL_WIDTH: usize = 4;
/// Width of a score column
pub const SCORE_COL_WIDTH: usize = 3;
/// Total width of a games row, including separators
pub const GAME_ROW_WIDTH: usize = STATUS_COL_WIDTH + 2 * (ABBREV_COL_WIDTH + SCORE_COL_WIDTH) + 6;

/// Standings columns: header label and width
pub const STANDINGS_COLUMNS: [(&str, usize); 8] = [
    ("Team", 5),
    ("W", 4),
    ("L", 4),
    ("PCT", 6),
    ("GB", 6),
    ("WCGB", 6),
    ("STRK", 5),
    ("L10", 5),
];

/// Detailed states worth showing instead of a start time or final marker.
/// The Stats API reports postponed and cancelled games as final.
const NOTABLE_STATES: [&str; 4] = ["Postponed", "Cancelled", "Delayed", "Suspended"];

fn has_notable_detail(game: &GameRecord) -> bool {
    NOTABLE_STATES.iter().any(|s| game.detail.starts_with(s))
}

/// Status cell of a game: start time, inning, or final marker
pub fn format_game_status(game: &GameRecord, time_format: &str, use_unicode: bool) -> String {
    match &game.status {
        GameStatus::Preview | GameStatus::Final { .. } if has_notable_detail(game) => {
            game.detail.clone()
        }
        GameStatus::Preview => {
            game.start_time.with_timezone(&Local).format(time_format).to_string()
        }
        GameStatus::InProgress => match &game.inning {
            Some(inning) => match inning.half {
                Some(half) if use_unicode => format!("{} {}", half.symbol(), inning.ordinal),
                Some(half) => format!("{} {}", half.abbrev(), inning.ordinal),
                None => inning.ordinal.clone(),
            },
            None => "Live".to_string(),
        },
        GameStatus::Final { completed_innings: Some(n) } if game.status.is_partial_final() => {
            format!("F/{}", n)
        }
        GameStatus::Final { .. } => "F".to_string(),
    }
}

fn format_score(score: Option<u32>) -> String {
    score.map(|s| s.to_string()).unwrap_or_default()
}

/// One line of the games page: status, away team and score, home team and score
pub fn format_game_row(
    game: &GameRecord,
    time_format: &str,
    box_chars: &BoxChars,
    use_unicode: bool,
) -> String {
    format!(
        "{:<status_w$} {sep} {:<abbrev_w$}{:>score_w$} {sep} {:<abbrev_w$}{:>score_w$}",
        format_game_status(game, time_format, use_unicode),
        display_abbrev(&game.away.name),
        format_score(game.away.score),
        display_abbrev(&game.home.name),
        format_score(game.home.score),
        sep = box_chars.vertical,
        status_w = STATUS_COL_WIDTH,
        abbrev_w = ABBREV_COL_WIDTH,
        score_w = SCORE_COL_WIDTH,
    )
}

pub fn format_standings_header() -> String {
    STANDINGS_COLUMNS
        .iter()
        .enumerate()
        .map(|(i, (label, width))| pad_cell(label, *width, i == 0))
        .collect()
}

pub fn standings_row_width() -> usize {
    STANDINGS_COLUMNS.iter().map(|(_, w)| w).sum()
}

/// One line of a standings page
pub fn format_standing_row(record: &StandingRecord) -> String {
    let cells = [
        display_abbrev(&record.team_name),
        record.wins.to_string(),
        record.losses.to_string(),
        format_pct(record.winning_pct()),
        record.division_games_back.clone().unwrap_or_default(),
        record.wild_card_games_back.clone().unwrap_or_default(),
        record.streak.clone().unwrap_or_default(),
        record.last_ten.clone().unwrap_or_default(),
    ];
    cells
        .iter()
        .zip(STANDINGS_COLUMNS.iter())
        .enumerate()
        .map(|(i, (cell, (_, width)))| pad_cell(cell, *width, i == 0))
        .collect()
}

fn pad_cell(text: &str, width: usize, left: bool) -> String {
    if left {
        format!("{:<width$}", text, width = width)
    } else {
        format!("{:>width$}", text, width = width)
    }
}
