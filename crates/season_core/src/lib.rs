//! # season_core - League Season Simulation Engine
//!
//! Simulates a double round-robin league season from each team's
//! historical aggregates (matches played, goals for, goals against).
//!
//! ## Features
//! - Deterministic fixture list (every pair twice, input order)
//! - Poisson match model blending attack and opponent defence rates
//! - Standings ranked by points, goal difference, goals scored
//! - Injectable goal sampler: same seed = same season
//! - JSON API for front ends

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;

pub use api::{simulate_season_json, SeasonRequest, SeasonResponse};
pub use config::{SeasonConfig, ZoneConfig, CONFIG_PATH_ENV};
pub use engine::{
    expected_goals, generate_fixtures, simulate_match, simulate_season, GoalSampler,
    PoissonGoals, ScriptedGoals, SeasonRunner,
};
pub use error::{Result, SeasonError};
pub use models::{
    Fixture, LeagueData, MatchLogEntry, MatchOutcome, MatchResult, SeasonResult, StandingsRow,
    TableZone, TeamStats, MAX_GOALS_PER_MATCH,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
