// Season simulation engine
//
// fixtures  → double round-robin schedule
// match_sim → expected goals + sampled score for one fixture
// season    → runs every fixture and builds the final table

pub mod fixtures;
pub mod match_sim;
pub mod sampler;
pub mod season;

#[cfg(test)]
mod season_proptest;

pub use fixtures::{fixture_count, generate_fixtures, LEGS};
pub use match_sim::{expected_goals, simulate_match, ExpectedGoals};
pub use sampler::{GoalSampler, PoissonGoals, ScriptedGoals};
pub use season::{simulate_season, SeasonRunner};
