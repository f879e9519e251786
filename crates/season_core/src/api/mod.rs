pub mod json_api;

pub use json_api::{
    simulate_season_json, MatchRecordEntry, SeasonRequest, SeasonResponse, TableEntry,
    SEASON_SCHEMA_VERSION,
};
