// Double round-robin schedule generation
use crate::error::{Result, SeasonError};
use crate::models::Fixture;
use itertools::Itertools;
use std::collections::HashSet;

pub const LEGS: u8 = 2;

/// Every unordered pair of teams, once per leg.
///
/// Pairs are enumerated in input order (i < j) and the full enumeration is
/// repeated for the second leg, so the schedule for a given team list is
/// always the same. Length is exactly `n * (n - 1)`.
pub fn generate_fixtures(teams: &[String]) -> Result<Vec<Fixture>> {
    if teams.len() < 2 {
        return Err(SeasonError::invalid_input(format!(
            "fixture generation needs at least 2 teams, got {}",
            teams.len()
        )));
    }

    let mut seen = HashSet::with_capacity(teams.len());
    if let Some(dup) = teams.iter().find(|name| !seen.insert(name.as_str())) {
        return Err(SeasonError::invalid_input(format!("duplicate team name '{}'", dup)));
    }

    let fixtures: Vec<Fixture> = (1..=LEGS)
        .flat_map(|leg| {
            teams
                .iter()
                .tuple_combinations()
                .map(move |(a, b)| Fixture::new(a.as_str(), b.as_str(), leg))
        })
        .collect();

    log::debug!("Generated {} fixtures for {} teams", fixtures.len(), teams.len());
    Ok(fixtures)
}

/// Number of fixtures a league of `teams` teams plays.
pub fn fixture_count(teams: usize) -> usize {
    teams * teams.saturating_sub(1)
}
