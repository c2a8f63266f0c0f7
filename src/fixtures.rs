/// Mock fixture data for testing and development
///
/// Deterministic games and standings used by unit tests, the `development`
/// mock client and the benchmarks. Standings cover all 30 clubs with
/// consistent games-back figures.
use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::team_abbrev::{league_of_division, AMERICAN_LEAGUE_ID, NATIONAL_LEAGUE_ID};
use crate::types::{GameRecord, GameStatus, InningHalf, InningState, StandingRecord, TeamScore};

/// (name, id, division, wins, losses, streak, last ten)
const CLUBS: [(&str, u32, &str, u32, u32, &str, &str); 30] = [
    ("New York Yankees", 147, "AL East", 62, 38, "W3", "7-3"),
    ("Baltimore Orioles", 110, "AL East", 60, 40, "L1", "6-4"),
    ("Boston Red Sox", 111, "AL East", 53, 47, "W1", "5-5"),
    ("Tampa Bay Rays", 139, "AL East", 50, 50, "L2", "4-6"),
    ("Toronto Blue Jays", 141, "AL East", 45, 55, "L4", "3-7"),
    ("Cleveland Guardians", 114, "AL Central", 61, 39, "W2", "6-4"),
    ("Minnesota Twins", 142, "AL Central", 56, 44, "W1", "6-4"),
    ("Kansas City Royals", 118, "AL Central", 55, 45, "L1", "5-5"),
    ("Detroit Tigers", 116, "AL Central", 49, 51, "W4", "8-2"),
    ("Chicago White Sox", 145, "AL Central", 27, 73, "L9", "1-9"),
    ("Houston Astros", 117, "AL West", 52, 48, "W2", "7-3"),
    ("Seattle Mariners", 136, "AL West", 52, 48, "L3", "4-6"),
    ("Texas Rangers", 140, "AL West", 48, 52, "W1", "5-5"),
    ("Athletics", 133, "AL West", 43, 57, "L1", "5-5"),
    ("Los Angeles Angels", 108, "AL West", 42, 58, "L2", "3-7"),
    ("Philadelphia Phillies", 143, "NL East", 64, 36, "L1", "4-6"),
    ("Atlanta Braves", 144, "NL East", 54, 46, "W1", "5-5"),
    ("New York Mets", 121, "NL East", 53, 47, "W5", "8-2"),
    ("Washington Nationals", 120, "NL East", 46, 54, "L2", "4-6"),
    ("Miami Marlins", 146, "NL East", 38, 62, "W1", "5-5"),
    ("Milwaukee Brewers", 158, "NL Central", 58, 42, "W2", "6-4"),
    ("St. Louis Cardinals", 138, "NL Central", 51, 49, "L1", "5-5"),
    ("Pittsburgh Pirates", 134, "NL Central", 50, 50, "W1", "6-4"),
    ("Chicago Cubs", 112, "NL Central", 49, 51, "L2", "4-6"),
    ("Cincinnati Reds", 113, "NL Central", 48, 52, "W3", "6-4"),
    ("Los Angeles Dodgers", 119, "NL West", 61, 39, "W1", "6-4"),
    ("San Diego Padres", 135, "NL West", 55, 45, "W6", "9-1"),
    ("Arizona Diamondbacks", 109, "NL West", 54, 46, "L1", "5-5"),
    ("San Francisco Giants", 137, "NL West", 50, 50, "L1", "4-6"),
    ("Colorado Rockies", 115, "NL West", 35, 65, "L3", "2-8"),
];

/// Number of wild-card spots per league
const WILD_CARD_SPOTS: usize = 3;

fn games_back(leader: (u32, u32), team: (u32, u32)) -> f64 {
    ((leader.0 as f64 - team.0 as f64) + (team.1 as f64 - leader.1 as f64)) / 2.0
}

fn format_games_back(gb: f64) -> String {
    if gb == 0.0 {
        "-".to_string()
    } else if gb < 0.0 {
        format!("+{:.1}", -gb)
    } else {
        format!("{:.1}", gb)
    }
}

/// Create mock standings for all 30 clubs
pub fn create_mock_standings() -> Vec<StandingRecord> {
    let mut standings: Vec<StandingRecord> = CLUBS
        .iter()
        .map(|&(name, id, division, wins, losses, streak, last_ten)| {
            let leader = CLUBS
                .iter()
                .filter(|c| c.2 == division)
                .map(|c| (c.3, c.4))
                .max_by(|a, b| games_back(*a, *b).total_cmp(&0.0))
                .unwrap_or((wins, losses));
            StandingRecord {
                team_id: id,
                team_name: name.to_string(),
                division: division.to_string(),
                wins,
                losses,
                division_games_back: Some(format_games_back(games_back(leader, (wins, losses)))),
                wild_card_games_back: None,
                streak: Some(streak.to_string()),
                last_ten: Some(last_ten.to_string()),
            }
        })
        .collect();

    // Wild-card games back is measured against the last club holding a spot
    for league in [AMERICAN_LEAGUE_ID, NATIONAL_LEAGUE_ID] {
        let mut contenders: Vec<(u32, u32)> = standings
            .iter()
            .filter(|s| league_of_division(&s.division) == Some(league) && !s.leads_division())
            .map(|s| (s.wins, s.losses))
            .collect();
        contenders.sort_by(|a, b| games_back(*b, *a).total_cmp(&0.0));
        let Some(&cutoff) = contenders.get(WILD_CARD_SPOTS - 1) else {
            continue;
        };
        for s in standings.iter_mut() {
            if league_of_division(&s.division) == Some(league) && !s.leads_division() {
                let behind = games_back(cutoff, (s.wins, s.losses));
                s.wild_card_games_back = Some(format_games_back(behind));
            }
        }
    }

    standings
}

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 20, 17, 5, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Create `count` mock games cycling through final, live and scheduled states
pub fn create_mock_games(count: usize) -> Vec<GameRecord> {
    (0..count)
        .map(|i| {
            let away = CLUBS[(2 * i) % CLUBS.len()];
            let home = CLUBS[(2 * i + 1) % CLUBS.len()];
            let status = match i % 4 {
                0 => GameStatus::Final { completed_innings: Some(9) },
                1 => GameStatus::InProgress,
                2 => GameStatus::Preview,
                _ => GameStatus::Final { completed_innings: Some(7) },
            };
            create_mock_game(i as u64, away.0, away.1, home.0, home.1, status)
        })
        .collect()
}

/// Create a single mock game
pub fn create_mock_game(
    index: u64,
    away_name: &str,
    away_id: u32,
    home_name: &str,
    home_id: u32,
    status: GameStatus,
) -> GameRecord {
    let started = !matches!(status, GameStatus::Preview);
    let inning = match status {
        GameStatus::InProgress => Some(InningState {
            ordinal: "5th".to_string(),
            half: Some(InningHalf::Top),
        }),
        _ => None,
    };
    let detail = match status {
        GameStatus::Preview => "Scheduled",
        GameStatus::InProgress => "In Progress",
        GameStatus::Final { .. } if status.is_partial_final() => "Completed Early",
        GameStatus::Final { .. } => "Final",
    };

    GameRecord {
        game_pk: 745_000 + index,
        start_time: base_time() + Duration::minutes(30 * index as i64),
        status,
        detail: detail.to_string(),
        away: TeamScore {
            id: away_id,
            name: away_name.to_string(),
            score: started.then_some((index % 6) as u32),
        },
        home: TeamScore {
            id: home_id,
            name: home_name.to_string(),
            score: started.then_some(((index + 3) % 7) as u32),
        },
        inning,
    }
}
