//! Season CLI Library
//!
//! CSV stats → validated league → season runs → text screens / JSON export

pub mod export;
pub mod render;
pub mod screen;
pub mod stats_csv;

use anyhow::Result;
use season_core::GoalSampler;
use std::io::{BufRead, Write};

pub use export::{build_export, verify_export, write_export, SeasonExport};
pub use screen::{App, Command, Screen};
pub use stats_csv::{load_league, load_team_stats, read_team_stats};

/// Text for whatever screen the app is on.
pub fn render_screen<S: GoalSampler>(app: &App<S>) -> String {
    match app.screen() {
        Screen::Menu => render::render_menu(app.simulation_complete()),
        Screen::Standings => match app.season() {
            Some(season) => render::render_table(season, app.zones()),
            None => render::render_menu(false),
        },
        Screen::TeamDetail { team } => {
            let log = app.season().and_then(|s| s.match_log(team)).unwrap_or_default();
            render::render_team(team, log)
        }
    }
}

/// Drive the app from line-based input until quit or end of input.
pub fn run_interactive<S, R, W>(app: &mut App<S>, input: R, output: &mut W) -> Result<()>
where
    S: GoalSampler,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();

    while app.is_running() {
        write!(output, "\n{}", render_screen(app))?;
        writeln!(output, "{}", screen::help_text(app.screen()))?;
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let Some(command) = Command::parse(&line?) else {
            continue;
        };

        match app.handle(command) {
            Ok(Some(notice)) => writeln!(output, "{notice}")?,
            Ok(None) => {}
            Err(e) => {
                log::error!("Simulation failed: {e}");
                writeln!(output, "Simulation failed: {e}")?;
            }
        }
    }

    Ok(())
}
