use serde::{Deserialize, Serialize};
use std::fmt;

pub const POINTS_WIN: u32 = 3;
pub const POINTS_DRAW: u32 = 1;
pub const POINTS_LOSS: u32 = 0;

/// Result of a match from one side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    pub fn from_score(scored: u32, conceded: u32) -> Self {
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => MatchOutcome::Win,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
            std::cmp::Ordering::Less => MatchOutcome::Loss,
        }
    }

    /// The same match seen from the opponent's side.
    pub fn reversed(self) -> Self {
        match self {
            MatchOutcome::Win => MatchOutcome::Loss,
            MatchOutcome::Draw => MatchOutcome::Draw,
            MatchOutcome::Loss => MatchOutcome::Win,
        }
    }

    pub fn points(self) -> u32 {
        match self {
            MatchOutcome::Win => POINTS_WIN,
            MatchOutcome::Draw => POINTS_DRAW,
            MatchOutcome::Loss => POINTS_LOSS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchOutcome::Win => "Win",
            MatchOutcome::Draw => "Draw",
            MatchOutcome::Loss => "Loss",
        }
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Final score of one simulated fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub first: String,
    pub second: String,
    pub first_goals: u32,
    pub second_goals: u32,
    /// Outcome for `first`; `second` gets the reverse
    pub outcome: MatchOutcome,
}

impl MatchResult {
    pub fn new(first: impl Into<String>, second: impl Into<String>, first_goals: u32, second_goals: u32) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            first_goals,
            second_goals,
            outcome: MatchOutcome::from_score(first_goals, second_goals),
        }
    }

    pub fn winner(&self) -> Option<&str> {
        match self.outcome {
            MatchOutcome::Win => Some(self.first.as_str()),
            MatchOutcome::Loss => Some(self.second.as_str()),
            MatchOutcome::Draw => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.outcome == MatchOutcome::Draw
    }

    /// Points awarded as (first, second)
    pub fn points(&self) -> (u32, u32) {
        (self.outcome.points(), self.outcome.reversed().points())
    }

    pub fn second_outcome(&self) -> MatchOutcome {
        self.outcome.reversed()
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}-{} {}", self.first, self.first_goals, self.second_goals, self.second)
    }
}
