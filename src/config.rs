//! Startup configuration, read once from the environment.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `BLOCKFALL_TICK_MS` | gravity interval in milliseconds | 500 |
//! | `BLOCKFALL_SEED` | seed for a reproducible piece sequence | random |
//! | `BLOCKFALL_LOG_PATH` | write logs to this file | logging off |
//! | `BLOCKFALL_LOG_LEVEL` | `error`, `warn`, `info`, `debug`, `trace` | `info` |
//!
//! Board dimensions are compile-time constants in `blockfall_types`.
//! Invalid values fall back to the defaults.

use log::LevelFilter;

use crate::types::DEFAULT_TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub tick_interval_ms: u64,
    pub seed: Option<u32>,
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_MS,
            seed: None,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let tick_interval_ms = lookup("BLOCKFALL_TICK_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(defaults.tick_interval_ms);

        let seed = lookup("BLOCKFALL_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_level = lookup("BLOCKFALL_LOG_LEVEL")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.log_level);

        Self {
            tick_interval_ms,
            seed,
            log_path,
            log_level,
        }
    }
}
