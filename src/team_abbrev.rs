/// Static lookup data: club abbreviations, standings groupings, logo URLs
use phf::phf_map;

/// American League id in the Stats API
pub const AMERICAN_LEAGUE_ID: u32 = 103;

/// National League id in the Stats API
pub const NATIONAL_LEAGUE_ID: u32 = 104;

static TEAM_ABBREVS: phf::Map<&'static str, &'static str> = phf_map! {
    "Arizona Diamondbacks" => "ARI",
    "Atlanta Braves" => "ATL",
    "Baltimore Orioles" => "BAL",
    "Boston Red Sox" => "BOS",
    "Chicago Cubs" => "CHC",
    "Chicago White Sox" => "CWS",
    "Cincinnati Reds" => "CIN",
    "Cleveland Guardians" => "CLE",
    "Colorado Rockies" => "COL",
    "Detroit Tigers" => "DET",
    "Houston Astros" => "HOU",
    "Kansas City Royals" => "KC",
    "Los Angeles Angels" => "LAA",
    "Los Angeles Dodgers" => "LAD",
    "Miami Marlins" => "MIA",
    "Milwaukee Brewers" => "MIL",
    "Minnesota Twins" => "MIN",
    "New York Mets" => "NYM",
    "New York Yankees" => "NYY",
    "Athletics" => "ATH",
    "Philadelphia Phillies" => "PHI",
    "Pittsburgh Pirates" => "PIT",
    "San Diego Padres" => "SD",
    "San Francisco Giants" => "SF",
    "Seattle Mariners" => "SEA",
    "St. Louis Cardinals" => "STL",
    "Tampa Bay Rays" => "TB",
    "Texas Rangers" => "TEX",
    "Toronto Blue Jays" => "TOR",
    "Washington Nationals" => "WSH",
    // Former names still returned for older seasons
    "Oakland Athletics" => "OAK",
    "Cleveland Indians" => "CLE",
};

/// Map a club's full name (e.g. "Toronto Blue Jays") to its abbreviation ("TOR")
pub fn team_abbrev(name: &str) -> Option<&'static str> {
    TEAM_ABBREVS.get(name).copied()
}

/// Abbreviation for display, falling back to the first three letters of the name
pub fn display_abbrev(name: &str) -> String {
    match team_abbrev(name) {
        Some(abbrev) => abbrev.to_string(),
        None => name
            .chars()
            .filter(|c| c.is_alphanumeric())
            .take(3)
            .collect::<String>()
            .to_uppercase(),
    }
}

/// How a standings page selects its teams
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingKind {
    /// Stats API division id
    Division(u32),
    /// Non division leaders of a league, by league id
    WildCard(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grouping {
    pub name: &'static str,
    pub kind: GroupingKind,
}

/// Standings pages in rotation order
pub static DIVISIONS: [Grouping; 8] = [
    Grouping { name: "AL East", kind: GroupingKind::Division(201) },
    Grouping { name: "AL Central", kind: GroupingKind::Division(202) },
    Grouping { name: "AL West", kind: GroupingKind::Division(200) },
    Grouping { name: "NL East", kind: GroupingKind::Division(204) },
    Grouping { name: "NL Central", kind: GroupingKind::Division(205) },
    Grouping { name: "NL West", kind: GroupingKind::Division(203) },
    Grouping { name: "AL Wild Card", kind: GroupingKind::WildCard(AMERICAN_LEAGUE_ID) },
    Grouping { name: "NL Wild Card", kind: GroupingKind::WildCard(NATIONAL_LEAGUE_ID) },
];

/// Display name of a Stats API division id
pub fn division_name(division_id: u32) -> Option<&'static str> {
    DIVISIONS.iter().find_map(|g| match g.kind {
        GroupingKind::Division(id) if id == division_id => Some(g.name),
        _ => None,
    })
}

/// League a division belongs to, from its display name
pub fn league_of_division(division: &str) -> Option<u32> {
    if division.starts_with("AL ") {
        Some(AMERICAN_LEAGUE_ID)
    } else if division.starts_with("NL ") {
        Some(NATIONAL_LEAGUE_ID)
    } else {
        None
    }
}

pub fn logo_url(team_id: u32) -> String {
    format!("https://www.mlbstatic.com/team-logos/{}.svg", team_id)
}
