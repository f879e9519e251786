use crate::error::{Result, SeasonError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Upper bound on goals scored or conceded per match played.
///
/// Keeps expected goals, and so every simulated season total, well inside
/// the table's counters.
pub const MAX_GOALS_PER_MATCH: u32 = 100;

/// Season-aggregate input for one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStats {
    pub name: String,
    pub matches_played: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl TeamStats {
    pub fn new(name: impl Into<String>, matches_played: u32, goals_for: u32, goals_against: u32) -> Self {
        Self {
            name: name.into(),
            matches_played,
            goals_for,
            goals_against,
        }
    }

    /// Average goals scored per match (GF / MP)
    pub fn scoring_rate(&self) -> Result<f64> {
        self.per_match(self.goals_for)
    }

    /// Average goals conceded per match (GA / MP)
    pub fn conceding_rate(&self) -> Result<f64> {
        self.per_match(self.goals_against)
    }

    fn per_match(&self, total: u32) -> Result<f64> {
        if self.matches_played == 0 {
            return Err(SeasonError::UndefinedRate { team: self.name.clone() });
        }
        Ok(total as f64 / self.matches_played as f64)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SeasonError::invalid_input("team name must not be empty"));
        }
        if self.matches_played == 0 {
            return Err(SeasonError::UndefinedRate { team: self.name.clone() });
        }

        let limit = u64::from(self.matches_played) * u64::from(MAX_GOALS_PER_MATCH);
        for (label, total) in [("GF", self.goals_for), ("GA", self.goals_against)] {
            if u64::from(total) > limit {
                return Err(SeasonError::invalid_input(format!(
                    "{}: {label} {total} exceeds {MAX_GOALS_PER_MATCH} per match over {} matches",
                    self.name, self.matches_played
                )));
            }
        }
        Ok(())
    }
}

/// Validated, read-only snapshot of every team's stats for one league.
///
/// Teams keep their input order; that order drives fixture enumeration and
/// the final tie order of fully level table rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueData {
    teams: Vec<TeamStats>,
    index: HashMap<String, usize>,
}

impl LeagueData {
    pub fn new(teams: Vec<TeamStats>) -> Result<Self> {
        if teams.len() < 2 {
            return Err(SeasonError::invalid_input(format!(
                "a league needs at least 2 teams, got {}",
                teams.len()
            )));
        }

        let mut index = HashMap::with_capacity(teams.len());
        for (i, team) in teams.iter().enumerate() {
            team.validate()?;
            if index.insert(team.name.clone(), i).is_some() {
                return Err(SeasonError::invalid_input(format!("duplicate team name '{}'", team.name)));
            }
        }

        log::debug!("League data validated: {} teams", teams.len());
        Ok(Self { teams, index })
    }

    pub fn team(&self, name: &str) -> Option<&TeamStats> {
        self.index.get(name).map(|&i| &self.teams[i])
    }

    pub fn require(&self, name: &str) -> Result<&TeamStats> {
        self.team(name)
            .ok_or_else(|| SeasonError::invalid_input(format!("unknown team '{}'", name)))
    }

    pub fn teams(&self) -> &[TeamStats] {
        &self.teams
    }

    pub fn names(&self) -> Vec<String> {
        self.teams.iter().map(|t| t.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates() {
        let team = TeamStats::new("Arsenal", 38, 76, 38);
        assert_eq!(team.scoring_rate().unwrap(), 2.0);
        assert_eq!(team.conceding_rate().unwrap(), 1.0);
    }

    #[test]
    fn test_zero_matches_is_undefined_rate() {
        let team = TeamStats::new("Ipswich Town", 0, 0, 0);
        assert!(matches!(team.scoring_rate(), Err(SeasonError::UndefinedRate { .. })));
    }

    #[test]
    fn test_league_rejects_bad_input() {
        let one = vec![TeamStats::new("A", 10, 10, 10)];
        assert!(matches!(LeagueData::new(one), Err(SeasonError::InvalidInput(_))));

        let dup = vec![TeamStats::new("A", 10, 10, 10), TeamStats::new("A", 10, 5, 5)];
        assert!(matches!(LeagueData::new(dup), Err(SeasonError::InvalidInput(_))));

        let blank = vec![TeamStats::new("A", 10, 10, 10), TeamStats::new("  ", 10, 5, 5)];
        assert!(matches!(LeagueData::new(blank), Err(SeasonError::InvalidInput(_))));

        let zero = vec![TeamStats::new("A", 10, 10, 10), TeamStats::new("B", 0, 0, 0)];
        assert!(matches!(LeagueData::new(zero), Err(SeasonError::UndefinedRate { team }) if team == "B"));
    }

    #[test]
    fn test_goal_totals_are_bounded_per_match() {
        assert!(TeamStats::new("Ceiling", 2, 200, 200).validate().is_ok());

        let err = TeamStats::new("Runaway", 1, 200_000_000, 3).validate().unwrap_err();
        assert!(matches!(err, SeasonError::InvalidInput(msg) if msg.contains("Runaway") && msg.contains("GF")));

        let err = TeamStats::new("Sieve", 38, 40, 3801).validate().unwrap_err();
        assert!(matches!(err, SeasonError::InvalidInput(msg) if msg.contains("GA")));
    }

    #[test]
    fn test_league_lookup_keeps_input_order() {
        let league = LeagueData::new(vec![
            TeamStats::new("Wolves", 38, 50, 65),
            TeamStats::new("Arsenal", 38, 91, 29),
        ])
        .unwrap();

        assert_eq!(league.names(), vec!["Wolves".to_string(), "Arsenal".to_string()]);
        assert_eq!(league.team("Arsenal").unwrap().goals_for, 91);
        assert!(league.team("Spurs").is_none());
        assert!(league.require("Spurs").is_err());
    }
}
