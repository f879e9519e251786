use serde::{Deserialize, Serialize};

use crate::config::ZoneConfig;
use crate::engine::SeasonRunner;
use crate::models::{LeagueData, MatchOutcome, MatchResult, SeasonResult, StandingsRow, TableZone, TeamStats};
use std::collections::BTreeMap;

pub const SEASON_SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Deserialize)]
pub struct SeasonRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub teams: Vec<TeamStats>,
    #[serde(default)]
    pub zones: Option<ZoneConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeasonResponse {
    pub schema_version: u8,
    /// None when the run drew from an entropy-seeded stream
    pub seed: Option<u64>,
    pub champion: String,
    pub table: Vec<TableEntry>,
    pub match_records: BTreeMap<String, Vec<MatchRecordEntry>>,
    pub matches: Vec<MatchResult>,
}

/// Standings row plus its finishing position and zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableEntry {
    pub position: usize,
    pub zone: TableZone,
    #[serde(flatten)]
    pub row: StandingsRow,
}

/// Match log line as the front end shows it ("X-Y" score, result label).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecordEntry {
    pub opponent: String,
    pub score: String,
    pub result: MatchOutcome,
}

impl SeasonResponse {
    pub fn from_season(seed: Option<u64>, season: &SeasonResult, zones: &ZoneConfig) -> Self {
        let table: Vec<TableEntry> = season
            .table()
            .iter()
            .enumerate()
            .map(|(i, row)| TableEntry {
                position: i + 1,
                zone: season.zone_of(i + 1, zones),
                row: row.clone(),
            })
            .collect();

        let match_records: BTreeMap<String, Vec<MatchRecordEntry>> = season
            .match_records()
            .iter()
            .map(|(team, log)| {
                let entries: Vec<MatchRecordEntry> = log
                    .iter()
                    .map(|entry| MatchRecordEntry {
                        opponent: entry.opponent.clone(),
                        score: entry.score(),
                        result: entry.result,
                    })
                    .collect();
                (team.clone(), entries)
            })
            .collect();

        Self {
            schema_version: SEASON_SCHEMA_VERSION,
            seed,
            champion: season.champion().map(|row| row.team.clone()).unwrap_or_default(),
            table,
            match_records,
            matches: season.matches().to_vec(),
        }
    }
}

/// Simulate a season from a JSON request and return the JSON response.
///
/// Same request (and therefore same seed) always yields the same response.
pub fn simulate_season_json(request_json: &str) -> Result<String, String> {
    let request: SeasonRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;

    if request.schema_version != SEASON_SCHEMA_VERSION {
        return Err(format!("Unsupported schema version: {}", request.schema_version));
    }

    let SeasonRequest { seed, teams, zones, .. } = request;
    let zones = zones.unwrap_or_default();

    let league = LeagueData::new(teams).map_err(|e| e.to_string())?;
    let season = SeasonRunner::seeded(league, seed)
        .simulate_season()
        .map_err(|e| e.to_string())?;

    let response = SeasonResponse::from_season(Some(seed), &season, &zones);
    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize response: {}", e))
}
