use super::match_result::MatchResult;
use super::standings::{MatchLogEntry, StandingsRow, TableZone};
use crate::config::ZoneConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Final snapshot of one simulated season.
///
/// `table` is sorted best first. `match_records` holds each team's fixtures
/// in the order they were played; `matches` is the full results list in
/// schedule order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonResult {
    table: Vec<StandingsRow>,
    match_records: BTreeMap<String, Vec<MatchLogEntry>>,
    matches: Vec<MatchResult>,
}

impl SeasonResult {
    pub(crate) fn new(
        table: Vec<StandingsRow>,
        match_records: BTreeMap<String, Vec<MatchLogEntry>>,
        matches: Vec<MatchResult>,
    ) -> Self {
        Self {
            table,
            match_records,
            matches,
        }
    }

    pub fn table(&self) -> &[StandingsRow] {
        &self.table
    }

    pub fn matches(&self) -> &[MatchResult] {
        &self.matches
    }

    pub fn match_records(&self) -> &BTreeMap<String, Vec<MatchLogEntry>> {
        &self.match_records
    }

    pub fn match_log(&self, team: &str) -> Option<&[MatchLogEntry]> {
        self.match_records.get(team).map(Vec::as_slice)
    }

    pub fn standings_for(&self, team: &str) -> Option<&StandingsRow> {
        self.table.iter().find(|row| row.team == team)
    }

    /// 1-based finishing position
    pub fn position_of(&self, team: &str) -> Option<usize> {
        self.table.iter().position(|row| row.team == team).map(|i| i + 1)
    }

    pub fn champion(&self) -> Option<&StandingsRow> {
        self.table.first()
    }

    /// Team names in table order.
    pub fn team_names(&self) -> Vec<&str> {
        self.table.iter().map(|row| row.team.as_str()).collect()
    }

    /// Zone for a 1-based position. The top zone takes precedence when the
    /// two overlap in very small leagues.
    pub fn zone_of(&self, position: usize, zones: &ZoneConfig) -> TableZone {
        let size = self.table.len();
        if position >= 1 && position <= zones.champions_league_spots {
            TableZone::ChampionsLeague
        } else if position.saturating_add(zones.relegation_spots) > size {
            TableZone::Relegation
        } else {
            TableZone::MidTable
        }
    }

    pub fn drawn_matches(&self) -> usize {
        self.matches.iter().filter(|m| m.is_draw()).count()
    }

    pub fn decisive_matches(&self) -> usize {
        self.matches.len() - self.drawn_matches()
    }

    pub fn total_goals(&self) -> u64 {
        self.matches
            .iter()
            .map(|m| u64::from(m.first_goals) + u64::from(m.second_goals))
            .sum()
    }
}
