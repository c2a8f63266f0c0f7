use std::fs;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use tracing::warn;
use xdg::BaseDirectories;

use crate::formatting::BoxChars;
use crate::scheduler::FetchIntervals;
use crate::stats_api::DEFAULT_BASE_URL;

/// Shortest refresh or rotation period accepted from the config file
pub const MIN_INTERVAL_MS: u64 = 1_000;

pub const DEFAULT_GAMES_PER_PAGE: usize = 8;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    /// Games refresh period, milliseconds
    pub scores_interval: u64,
    /// Standings refresh period, milliseconds
    pub standings_interval: u64,
    /// Rotation period, milliseconds
    pub page_interval: u64,
    pub games_per_page: usize,
    /// chrono format for game start times
    pub time_format: String,
    pub api_base_url: String,
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(deserialize_with = "deserialize_color", serialize_with = "serialize_color")]
    pub header_fg: Color,
    #[serde(deserialize_with = "deserialize_color", serialize_with = "serialize_color")]
    pub live_fg: Color,
    pub use_unicode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            scores_interval: 120_000,
            standings_interval: 900_000,
            page_interval: 20_000,
            games_per_page: DEFAULT_GAMES_PER_PAGE,
            time_format: "%H:%M".to_string(),
            api_base_url: DEFAULT_BASE_URL.to_string(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            header_fg: Color::Cyan,
            live_fg: Color::Rgb(255, 165, 0), // Orange
            use_unicode: true,
        }
    }
}

impl ThemeConfig {
    pub fn box_chars(&self) -> BoxChars {
        BoxChars::from_use_unicode(self.use_unicode)
    }
}

impl Config {
    /// Clamp values the scheduler cannot run with, logging each correction
    pub fn sanitized(mut self) -> Self {
        for (name, value) in [
            ("scores_interval", &mut self.scores_interval),
            ("standings_interval", &mut self.standings_interval),
            ("page_interval", &mut self.page_interval),
        ] {
            if *value < MIN_INTERVAL_MS {
                warn!("CONFIG: {} = {}ms is too short, using {}ms", name, value, MIN_INTERVAL_MS);
                *value = MIN_INTERVAL_MS;
            }
        }
        if self.games_per_page == 0 {
            warn!("CONFIG: games_per_page must be at least 1, using 1");
            self.games_per_page = 1;
        }
        self
    }

    pub fn fetch_intervals(&self) -> FetchIntervals {
        FetchIntervals {
            scores: Duration::from_millis(self.scores_interval),
            standings: Duration::from_millis(self.standings_interval),
        }
    }

    pub fn page_interval(&self) -> Duration {
        Duration::from_millis(self.page_interval)
    }

    pub fn games_per_page(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.games_per_page).unwrap_or(NonZeroUsize::MIN)
    }
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

fn serialize_color<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&color.to_string())
}

/// Parse a color name ("cyan", "orange") or hex value ("#FF6600", "#f60")
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();
    if s == "orange" {
        return Some(Color::Rgb(255, 165, 0));
    }
    if let Some(hex) = s.strip_prefix('#') {
        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => return None,
        };
        let channel = |i: usize| u8::from_str_radix(expanded.get(i..i + 2)?, 16).ok();
        return Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?));
    }
    // ratatui understands the sixteen ANSI names
    s.parse::<Color>().ok().filter(|c| !matches!(c, Color::Rgb(..) | Color::Indexed(_)))
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

/// Read the config file, falling back to defaults when it is missing or invalid
pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    toml::from_str(&content).unwrap_or_else(|_| Config::default())
}
