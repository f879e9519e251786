use super::match_result::MatchOutcome;
use crate::error::{Result, SeasonError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Running league-table line for one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub team: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
}

impl StandingsRow {
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    /// Fold one finished match into the row.
    ///
    /// Fails without touching the row if any running total would overflow.
    pub fn record(&mut self, scored: u32, conceded: u32, outcome: MatchOutcome) -> Result<()> {
        let goal_difference =
            i32::try_from(i64::from(self.goal_difference) + i64::from(scored) - i64::from(conceded)).ok();
        let totals = (
            self.goals_for.checked_add(scored),
            self.goals_against.checked_add(conceded),
            goal_difference,
            self.points.checked_add(outcome.points()),
        );
        let (Some(goals_for), Some(goals_against), Some(goal_difference), Some(points)) = totals else {
            return Err(SeasonError::invalid_input(format!(
                "{}: season totals overflow after a {scored}-{conceded} result",
                self.team
            )));
        };

        self.played += 1;
        self.goals_for = goals_for;
        self.goals_against = goals_against;
        self.goal_difference = goal_difference;
        self.points = points;

        match outcome {
            MatchOutcome::Win => self.won += 1,
            MatchOutcome::Draw => self.drawn += 1,
            MatchOutcome::Loss => self.lost += 1,
        }
        Ok(())
    }

    /// Sort key: points, then goal difference, then goals scored.
    pub fn ranking_key(&self) -> (u32, i32, u32) {
        (self.points, self.goal_difference, self.goals_for)
    }

    /// Ordering for the final table (better rows first).
    pub fn table_order(a: &StandingsRow, b: &StandingsRow) -> Ordering {
        b.ranking_key().cmp(&a.ranking_key())
    }
}

/// One line of a team's fixture history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchLogEntry {
    pub opponent: String,
    pub goals_for: u32,
    pub goals_against: u32,
    pub result: MatchOutcome,
}

impl MatchLogEntry {
    pub fn new(opponent: impl Into<String>, goals_for: u32, goals_against: u32, result: MatchOutcome) -> Self {
        Self {
            opponent: opponent.into(),
            goals_for,
            goals_against,
            result,
        }
    }

    /// "X-Y" from this team's perspective
    pub fn score(&self) -> String {
        format!("{}-{}", self.goals_for, self.goals_against)
    }
}

/// Band of the table a finishing position falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableZone {
    ChampionsLeague,
    MidTable,
    Relegation,
}
