//! Plain-text rendering of the three screens.

use season_core::{MatchLogEntry, MatchOutcome, SeasonResult, TableZone, ZoneConfig};

const TITLE: &str = "League Season Simulator";

/// Join screen lines, each terminated by a newline.
fn screen(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

pub fn render_menu(simulation_complete: bool) -> String {
    let mut lines = vec![
        TITLE.to_string(),
        "=".repeat(TITLE.len()),
        "  [s] Run New Simulation".to_string(),
    ];
    if simulation_complete {
        lines.push("  [v] View current".to_string());
    }
    lines.push("  [q] Quit".to_string());
    screen(lines)
}

fn zone_marker(zone: TableZone) -> &'static str {
    match zone {
        TableZone::ChampionsLeague => "CL",
        TableZone::MidTable => "",
        TableZone::Relegation => "REL",
    }
}

pub fn render_table(season: &SeasonResult, zones: &ZoneConfig) -> String {
    let name_width = season
        .table()
        .iter()
        .map(|row| row.team.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut lines = vec![
        "Season Standings".to_string(),
        format!(
            "{:>3}  {:<name_width$}  {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}",
            "#", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
        ),
    ];

    lines.extend(season.table().iter().enumerate().map(|(i, row)| {
        let position = i + 1;
        format!(
            "{:>3}  {:<name_width$}  {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>+4} {:>4}  {}",
            position,
            row.team,
            row.played,
            row.won,
            row.drawn,
            row.lost,
            row.goals_for,
            row.goals_against,
            row.goal_difference,
            row.points,
            zone_marker(season.zone_of(position, zones)),
        )
    }));
    screen(lines)
}

fn outcome_marker(outcome: MatchOutcome) -> &'static str {
    match outcome {
        MatchOutcome::Win => "W",
        MatchOutcome::Draw => "D",
        MatchOutcome::Loss => "L",
    }
}

pub fn render_team(team: &str, log: &[MatchLogEntry]) -> String {
    let opponent_width = log
        .iter()
        .map(|entry| entry.opponent.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut lines = vec![
        format!("{team} Season Stats"),
        format!("{:<opponent_width$}  {:>5}  Result", "Opponent", "Score"),
    ];
    lines.extend(log.iter().map(|entry| {
        format!(
            "{:<opponent_width$}  {:>5}  {} {}",
            entry.opponent,
            entry.score(),
            outcome_marker(entry.result),
            entry.result,
        )
    }));

    let form: String = log.iter().rev().take(5).rev().map(|e| outcome_marker(e.result)).collect();
    if !form.is_empty() {
        lines.push(format!("Last five: {form}"));
    }
    screen(lines)
}
