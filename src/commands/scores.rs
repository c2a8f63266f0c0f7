use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::commands::TextRenderer;
use crate::config::Config;
use crate::data_provider::MlbDataProvider;
use crate::renderer::{PageInfo, Renderer};
use crate::types::GameRecord;

/// Write all of today's games as a single page
pub fn write_scores<W: Write>(out: W, games: &[GameRecord], config: &Config) -> io::Result<()> {
    let mut renderer = TextRenderer::new(out, config);
    let page = PageInfo {
        index: 0,
        count: usize::from(!games.is_empty()),
    };
    renderer.render_games_page(games, page)
}

pub async fn run(client: &dyn MlbDataProvider, config: &Config) -> Result<()> {
    let games = client
        .todays_games()
        .await
        .context("Failed to fetch today's games")?;

    write_scores(io::stdout().lock(), &games, config).context("Failed to write scores")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::testing::ScriptedProvider;

    #[test]
    fn test_write_scores_lists_every_game() {
        let games = fixtures::create_mock_games(12);
        let mut out = Vec::new();
        write_scores(&mut out, &games, &Config::default()).unwrap();

        let text = String::from_utf8(out).unwrap();
        // Title, rule, twelve rows, blank line
        assert_eq!(text.lines().count(), 15);
        assert!(text.starts_with("Scores\n"));
    }

    #[tokio::test]
    async fn test_run_reports_fetch_failure() {
        let client = ScriptedProvider::new();
        let err = run(&client, &Config::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch today's games");
        assert!(format!("{:#}", err).contains("HTTP 503"));
    }
}
