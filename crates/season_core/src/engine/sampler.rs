//! Goal sampling sources for the match simulator.
//!
//! The simulator never touches an RNG directly; it asks a [`GoalSampler`]
//! for one score per side. Production wraps a seedable RNG in
//! [`PoissonGoals`], tests and replays feed fixed scores via
//! [`ScriptedGoals`].

use crate::error::{Result, SeasonError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Poisson};
use std::collections::VecDeque;

pub trait GoalSampler {
    /// Draw a goal count for a side expected to score `expected_goals`.
    fn sample_goals(&mut self, expected_goals: f64) -> Result<u32>;
}

impl<S: GoalSampler + ?Sized> GoalSampler for &mut S {
    fn sample_goals(&mut self, expected_goals: f64) -> Result<u32> {
        (**self).sample_goals(expected_goals)
    }
}

/// Poisson-distributed goals from any `rand` RNG.
#[derive(Debug, Clone)]
pub struct PoissonGoals<R> {
    rng: R,
}

impl<R: Rng> PoissonGoals<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl PoissonGoals<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> GoalSampler for PoissonGoals<R> {
    fn sample_goals(&mut self, expected_goals: f64) -> Result<u32> {
        if !expected_goals.is_finite() || expected_goals < 0.0 {
            return Err(SeasonError::invalid_input(format!(
                "expected goals must be a finite non-negative number, got {expected_goals}"
            )));
        }
        // Poisson(0) always yields 0; rand_distr rejects a zero rate.
        if expected_goals == 0.0 {
            return Ok(0);
        }

        let poisson = Poisson::new(expected_goals)
            .map_err(|e| SeasonError::invalid_input(format!("poisson({expected_goals}): {e}")))?;
        let goals: f64 = poisson.sample(&mut self.rng);
        if goals > f64::from(u32::MAX) {
            return Err(SeasonError::invalid_input(format!(
                "poisson({expected_goals}) drew {goals} goals, beyond a u32 score"
            )));
        }
        Ok(goals as u32)
    }
}

/// Replays a fixed sequence of scores, ignoring the expected-goal input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedGoals {
    scores: VecDeque<u32>,
}

impl ScriptedGoals {
    pub fn new(scores: impl IntoIterator<Item = u32>) -> Self {
        Self {
            scores: scores.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.scores.len()
    }
}

impl GoalSampler for ScriptedGoals {
    fn sample_goals(&mut self, _expected_goals: f64) -> Result<u32> {
        self.scores
            .pop_front()
            .ok_or_else(|| SeasonError::invalid_input("scripted score sequence exhausted"))
    }
}
