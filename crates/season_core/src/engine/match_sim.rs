// Single-match simulation from season aggregates
use super::sampler::GoalSampler;
use crate::error::Result;
use crate::models::{MatchResult, TeamStats};

/// Goal expectation for both sides of one fixture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpectedGoals {
    pub first: f64,
    pub second: f64,
}

/// Blend each side's scoring rate with the opponent's conceding rate.
///
/// `first = (first.GF/MP + second.GA/MP) / 2`, and symmetrically for
/// `second`. Fails with `UndefinedRate` when either team has MP = 0.
pub fn expected_goals(first: &TeamStats, second: &TeamStats) -> Result<ExpectedGoals> {
    let first_attack = first.scoring_rate()?;
    let first_defence = first.conceding_rate()?;
    let second_attack = second.scoring_rate()?;
    let second_defence = second.conceding_rate()?;

    Ok(ExpectedGoals {
        first: (first_attack + second_defence) / 2.0,
        second: (second_attack + first_defence) / 2.0,
    })
}

/// Simulate one fixture. Draws exactly two samples, first side then second.
pub fn simulate_match<S: GoalSampler + ?Sized>(
    first: &TeamStats,
    second: &TeamStats,
    sampler: &mut S,
) -> Result<MatchResult> {
    let xg = expected_goals(first, second)?;

    let first_goals = sampler.sample_goals(xg.first)?;
    let second_goals = sampler.sample_goals(xg.second)?;

    let result = MatchResult::new(first.name.as_str(), second.name.as_str(), first_goals, second_goals);
    log::trace!(
        "{} (xG {:.2}) vs {} (xG {:.2}): {}-{}",
        first.name,
        xg.first,
        second.name,
        xg.second,
        first_goals,
        second_goals
    );
    Ok(result)
}
