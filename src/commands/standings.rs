use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::commands::{find_grouping, TextRenderer};
use crate::config::Config;
use crate::dashboard::select_standings;
use crate::data_provider::MlbDataProvider;
use crate::renderer::{PageInfo, Renderer};
use crate::team_abbrev::{Grouping, DIVISIONS};
use crate::types::StandingRecord;

/// Write the given groupings, one page each, in rotation order
pub fn write_standings<W: Write>(
    out: W,
    standings: &[StandingRecord],
    groupings: &[&Grouping],
    config: &Config,
) -> io::Result<()> {
    let mut renderer = TextRenderer::new(out, config);
    for (index, grouping) in groupings.iter().enumerate() {
        let teams = select_standings(grouping, standings);
        let page = PageInfo {
            index,
            count: groupings.len(),
        };
        renderer.render_standings_page(grouping.name, &teams, page)?;
    }
    Ok(())
}

pub async fn run(
    client: &dyn MlbDataProvider,
    division: Option<String>,
    config: &Config,
) -> Result<()> {
    // Validate before the network round trip
    let groupings: Vec<&Grouping> = match division {
        Some(name) => vec![find_grouping(&name)?],
        None => DIVISIONS.iter().collect(),
    };

    let standings = client
        .current_standings()
        .await
        .context("Failed to fetch current standings")?;

    write_standings(io::stdout().lock(), &standings, &groupings, config)
        .context("Failed to write standings")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::testing::ScriptedProvider;

    #[test]
    fn test_all_groupings_in_rotation_order() {
        let standings = fixtures::create_mock_standings();
        let groupings: Vec<&Grouping> = DIVISIONS.iter().collect();
        let mut out = Vec::new();
        write_standings(&mut out, &standings, &groupings, &Config::default()).unwrap();

        let text = String::from_utf8(out).unwrap();
        let titles: Vec<&str> = text
            .lines()
            .filter(|line| DIVISIONS.iter().any(|g| g.name == *line))
            .collect();
        let expected: Vec<&str> = DIVISIONS.iter().map(|g| g.name).collect();
        assert_eq!(titles, expected);
    }

    #[test]
    fn test_single_division() {
        let standings = fixtures::create_mock_standings();
        let grouping = find_grouping("nl west").unwrap();
        let mut out = Vec::new();
        write_standings(&mut out, &standings, &[grouping], &Config::default()).unwrap();

        let text = String::from_utf8(out).unwrap();
        let rows: Vec<&str> = text.lines().skip(4).filter(|l| !l.is_empty()).collect();
        assert_eq!(rows.len(), 5);
        assert!(rows[0].starts_with("LAD"));
        assert!(rows[4].starts_with("COL"));
    }

    #[tokio::test]
    async fn test_unknown_division_fails_before_fetch() {
        let client = ScriptedProvider::new()
            .with_standings(vec![Ok(fixtures::create_mock_standings())]);
        let err = run(&client, Some("Metropolitan".to_string()), &Config::default())
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Unknown division"));
    }
}
