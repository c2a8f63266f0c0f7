pub mod cache;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod data_provider;
pub mod error;
pub mod fixtures;
pub mod formatting;
pub mod renderer;
pub mod rotation;
pub mod runtime;
pub mod scheduler;
pub mod stats_api;
pub mod team_abbrev;
pub mod tui;
pub mod types;

#[cfg(test)]
mod testing;

#[cfg(feature = "development")]
pub mod dev;
