use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::data_provider::MlbDataProvider;
use crate::team_abbrev::logo_url;
use crate::types::StandingRecord;

/// Standing as written by `export`, with the club's logo
#[derive(Debug, Serialize)]
pub struct ExportedStanding<'a> {
    #[serde(flatten)]
    pub record: &'a StandingRecord,
    pub logo_url: String,
}

/// Pretty JSON array of every standing, in source order
pub fn standings_json(standings: &[StandingRecord]) -> serde_json::Result<String> {
    let exported: Vec<ExportedStanding> = standings
        .iter()
        .map(|record| ExportedStanding {
            record,
            logo_url: logo_url(record.team_id),
        })
        .collect();
    serde_json::to_string_pretty(&exported)
}

/// Fetch standings once and write them to `path`, or stdout when absent
pub async fn run(client: &dyn MlbDataProvider, path: Option<&Path>) -> Result<()> {
    let standings = client
        .current_standings()
        .await
        .context("Failed to fetch current standings")?;

    let json = standings_json(&standings).context("Failed to encode standings")?;

    match path {
        Some(path) => {
            fs::write(path, json + "\n")
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("EXPORT: wrote {} standings to {}", standings.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", json).context("Failed to write standings")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::testing::ScriptedProvider;

    #[test]
    fn test_json_is_flat_with_logo() {
        let standings = fixtures::create_mock_standings();
        let json = standings_json(&standings[..1]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let first = &value[0];
        assert_eq!(first["team_name"], "New York Yankees");
        assert_eq!(first["wins"], 62);
        assert_eq!(first["division_games_back"], "-");
        assert_eq!(first["logo_url"], "https://www.mlbstatic.com/team-logos/147.svg");
    }

    #[test]
    fn test_empty_standings() {
        assert_eq!(standings_json(&[]).unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_run_writes_file() {
        let client = ScriptedProvider::new()
            .with_standings(vec![Ok(fixtures::create_mock_standings())]);
        let path = std::env::temp_dir().join(format!("mlb-export-{}.json", std::process::id()));

        run(&client, Some(&path)).await.unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_file(&path);
        let value: Vec<serde_json::Value> = serde_json::from_str(&content).unwrap();
        assert_eq!(value.len(), 30);
    }

    #[tokio::test]
    async fn test_run_fails_without_writing() {
        let client = ScriptedProvider::new();
        let path = std::env::temp_dir()
            .join(format!("mlb-export-fail-{}.json", std::process::id()));

        assert!(run(&client, Some(&path)).await.is_err());
        assert!(!path.exists());
    }
}
