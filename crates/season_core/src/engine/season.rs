use super::fixtures::generate_fixtures;
use super::match_sim::simulate_match;
use super::sampler::{GoalSampler, PoissonGoals};
use crate::error::{Result, SeasonError};
use crate::models::{LeagueData, MatchLogEntry, SeasonResult, StandingsRow};
use rand_chacha::ChaCha8Rng;
use std::collections::{BTreeMap, HashMap};

/// Play a full double round-robin and return the final table.
///
/// Fixtures run in schedule order; each result is folded into both teams'
/// rows and appended to both match logs. A failure on any fixture aborts
/// the whole run with `SimulationAborted`.
pub fn simulate_season<S: GoalSampler + ?Sized>(league: &LeagueData, sampler: &mut S) -> Result<SeasonResult> {
    let names = league.names();
    let fixtures = generate_fixtures(&names)?;

    log::info!("Simulating season: {} teams, {} fixtures", names.len(), fixtures.len());

    let slots: HashMap<&str, usize> = names.iter().enumerate().map(|(i, n)| (n.as_str(), i)).collect();
    let mut rows: Vec<StandingsRow> = names.iter().map(StandingsRow::new).collect();
    let mut logs: Vec<Vec<MatchLogEntry>> = vec![Vec::with_capacity(2 * (names.len() - 1)); names.len()];
    let mut matches = Vec::with_capacity(fixtures.len());

    for (number, fixture) in fixtures.iter().enumerate() {
        let abort = |source: SeasonError| SeasonError::SimulationAborted {
            fixture: number + 1,
            first: fixture.first.clone(),
            second: fixture.second.clone(),
            source: Box::new(source),
        };

        let first = league.require(&fixture.first).map_err(abort)?;
        let second = league.require(&fixture.second).map_err(abort)?;
        let result = simulate_match(first, second, &mut *sampler).map_err(abort)?;

        let a = slots[fixture.first.as_str()];
        let b = slots[fixture.second.as_str()];

        rows[a]
            .record(result.first_goals, result.second_goals, result.outcome)
            .map_err(abort)?;
        rows[b]
            .record(result.second_goals, result.first_goals, result.second_outcome())
            .map_err(abort)?;

        logs[a].push(MatchLogEntry::new(
            fixture.second.as_str(),
            result.first_goals,
            result.second_goals,
            result.outcome,
        ));
        logs[b].push(MatchLogEntry::new(
            fixture.first.as_str(),
            result.second_goals,
            result.first_goals,
            result.second_outcome(),
        ));

        matches.push(result);
    }

    // Stable: teams level on every key keep input order
    rows.sort_by(StandingsRow::table_order);

    let match_records: BTreeMap<String, Vec<MatchLogEntry>> = names.into_iter().zip(logs).collect();

    if let Some(top) = rows.first() {
        log::info!("Season complete: {} champions on {} points", top.team, top.points);
    }

    Ok(SeasonResult::new(rows, match_records, matches))
}

/// Holds the league snapshot and a long-lived goal sampler so repeated
/// runs keep drawing from one continuing random stream.
#[derive(Debug, Clone)]
pub struct SeasonRunner<S> {
    league: LeagueData,
    sampler: S,
    runs: u32,
}

impl<S: GoalSampler> SeasonRunner<S> {
    pub fn new(league: LeagueData, sampler: S) -> Self {
        Self {
            league,
            sampler,
            runs: 0,
        }
    }

    /// Run a fresh season. Nothing carries over from earlier runs except
    /// the position in the random stream.
    pub fn simulate_season(&mut self) -> Result<SeasonResult> {
        let result = simulate_season(&self.league, &mut self.sampler)?;
        self.runs += 1;
        log::debug!("Completed simulation run #{}", self.runs);
        Ok(result)
    }

    pub fn league(&self) -> &LeagueData {
        &self.league
    }

    pub fn runs(&self) -> u32 {
        self.runs
    }
}

impl SeasonRunner<PoissonGoals<ChaCha8Rng>> {
    pub fn seeded(league: LeagueData, seed: u64) -> Self {
        Self::new(league, PoissonGoals::seeded(seed))
    }

    pub fn from_entropy(league: LeagueData) -> Self {
        Self::new(league, PoissonGoals::from_entropy())
    }
}
