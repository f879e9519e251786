//! Property-based checks of the season engine over random leagues.

use super::fixtures::generate_fixtures;
use super::sampler::PoissonGoals;
use super::season::simulate_season;
use crate::models::{LeagueData, TeamStats};
use proptest::prelude::*;
use std::collections::HashMap;

fn team_stats_strategy() -> impl Strategy<Value = (u32, u32, u32)> {
    (1u32..=60, 0u32..=100, 0u32..=100)
}

fn league_strategy() -> impl Strategy<Value = LeagueData> {
    prop::collection::vec(team_stats_strategy(), 2..=12).prop_map(|stats| {
        let teams = stats
            .into_iter()
            .enumerate()
            .map(|(i, (mp, gf, ga))| TeamStats::new(format!("Team {i}"), mp, gf, ga))
            .collect();
        LeagueData::new(teams).expect("generated league is valid")
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fixtures_cover_every_pair_twice(n in 2usize..=24) {
        let teams: Vec<String> = (0..n).map(|i| format!("T{i}")).collect();
        let fixtures = generate_fixtures(&teams).unwrap();
        prop_assert_eq!(fixtures.len(), n * (n - 1));

        let mut meetings: HashMap<(&str, &str), usize> = HashMap::new();
        for fixture in &fixtures {
            prop_assert_ne!(&fixture.first, &fixture.second);
            *meetings.entry(fixture.pair_key()).or_default() += 1;
        }
        prop_assert_eq!(meetings.len(), n * (n - 1) / 2);
        prop_assert!(meetings.values().all(|&count| count == 2));
    }

    #[test]
    fn season_invariants_hold(league in league_strategy(), seed in any::<u64>()) {
        let n = league.len() as u32;
        let mut sampler = PoissonGoals::seeded(seed);
        let season = simulate_season(&league, &mut sampler).unwrap();

        prop_assert_eq!(season.table().len(), league.len());
        prop_assert_eq!(season.matches().len(), league.len() * (league.len() - 1));

        for row in season.table() {
            prop_assert_eq!(row.played, 2 * (n - 1));
            prop_assert_eq!(row.won + row.drawn + row.lost, row.played);
            prop_assert_eq!(row.goals_for as i32 - row.goals_against as i32, row.goal_difference);
            prop_assert_eq!(season.match_log(&row.team).unwrap().len() as u32, row.played);
        }

        let goals_for: u32 = season.table().iter().map(|r| r.goals_for).sum();
        let goals_against: u32 = season.table().iter().map(|r| r.goals_against).sum();
        prop_assert_eq!(goals_for, goals_against);

        let points: u32 = season.table().iter().map(|r| r.points).sum();
        prop_assert_eq!(points as usize, 3 * season.decisive_matches() + 2 * season.drawn_matches());

        for pair in season.table().windows(2) {
            prop_assert!(pair[0].ranking_key() >= pair[1].ranking_key());
        }
    }

    #[test]
    fn seeded_runs_are_identical(league in league_strategy(), seed in any::<u64>()) {
        let first = simulate_season(&league, &mut PoissonGoals::seeded(seed)).unwrap();
        let second = simulate_season(&league, &mut PoissonGoals::seeded(seed)).unwrap();
        prop_assert_eq!(first, second);
    }
}
