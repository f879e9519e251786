//! # Season configuration
//!
//! JSON file with optional seed, table zone sizes and the default stats
//! path. Every field has a default, so `{}` is a valid config.
//!
//! ```rust,ignore
//! let config = SeasonConfig::load("season.json")?;
//! let runner = config.runner(league);
//! ```

use crate::engine::{PoissonGoals, SeasonRunner};
use crate::error::{Result, SeasonError};
use crate::models::LeagueData;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs};

/// Environment variable holding a path to a [`SeasonConfig`] JSON file.
pub const CONFIG_PATH_ENV: &str = "SEASON_SIM_CONFIG_PATH";

/// How many table positions belong to the top and bottom zones.
///
/// Sizes are not tied to a league size; a zone larger than the table just
/// covers all of it, and the top zone wins where the two overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneConfig {
    #[serde(default = "default_champions_league_spots")]
    pub champions_league_spots: usize,
    #[serde(default = "default_relegation_spots")]
    pub relegation_spots: usize,
}

fn default_champions_league_spots() -> usize {
    4
}
fn default_relegation_spots() -> usize {
    3
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            champions_league_spots: default_champions_league_spots(),
            relegation_spots: default_relegation_spots(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonConfig {
    /// Fixed seed for reproducible runs; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub zones: ZoneConfig,
    /// Default stats CSV when none is given on the command line
    #[serde(default)]
    pub stats_path: Option<String>,
}

impl SeasonConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| SeasonError::Config(format!("failed to read '{}': {}", path.display(), e)))?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: SeasonConfig =
            serde_json::from_str(json).map_err(|e| SeasonError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from [`CONFIG_PATH_ENV`] if set, otherwise `None`.
    pub fn from_env() -> Result<Option<Self>> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(None);
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(None);
        }

        log::debug!("Loading season config from {CONFIG_PATH_ENV}='{path}'");
        Self::load(path).map(Some)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.stats_path {
            if path.trim().is_empty() {
                return Err(SeasonError::Config("stats_path must not be empty".to_string()));
            }
        }
        Ok(())
    }

    /// Runner seeded from `seed` when set, from entropy otherwise.
    pub fn runner(&self, league: LeagueData) -> SeasonRunner<PoissonGoals<ChaCha8Rng>> {
        match self.seed {
            Some(seed) => SeasonRunner::seeded(league, seed),
            None => SeasonRunner::from_entropy(league),
        }
    }
}
