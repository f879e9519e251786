//! Front-end state machine: which screen is showing and what each command
//! does on it. Holds the current season result; a new run replaces it.

use season_core::{GoalSampler, Result, SeasonResult, SeasonRunner, ZoneConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Standings,
    TeamDetail { team: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run a new simulation and show its table
    Simulate,
    /// Show the last simulated table
    ViewCurrent,
    /// Open a team's match log by table position (1-based)
    SelectPosition(usize),
    /// Open a team's match log by name
    SelectTeam(String),
    Back,
    Help,
    Quit,
}

impl Command {
    /// Parse one line of user input. Numbers select table positions; any
    /// other unrecognised text is treated as a team name.
    pub fn parse(input: &str) -> Option<Command> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let cmd = match input.to_ascii_lowercase().as_str() {
            "s" | "sim" | "simulate" | "run" => Command::Simulate,
            "v" | "view" => Command::ViewCurrent,
            "b" | "back" => Command::Back,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => match input.parse::<usize>() {
                Ok(position) => Command::SelectPosition(position),
                Err(_) => Command::SelectTeam(input.to_string()),
            },
        };
        Some(cmd)
    }
}

pub struct App<S> {
    runner: SeasonRunner<S>,
    zones: ZoneConfig,
    season: Option<SeasonResult>,
    screen: Screen,
    running: bool,
}

impl<S: GoalSampler> App<S> {
    pub fn new(runner: SeasonRunner<S>, zones: ZoneConfig) -> Self {
        Self {
            runner,
            zones,
            season: None,
            screen: Screen::Menu,
            running: true,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn season(&self) -> Option<&SeasonResult> {
        self.season.as_ref()
    }

    pub fn zones(&self) -> &ZoneConfig {
        &self.zones
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn simulation_complete(&self) -> bool {
        self.season.is_some()
    }

    /// Apply one command. Returns a notice for the user when the command
    /// does not apply on the current screen. A failed simulation run is
    /// returned as an error and leaves the previous result in place.
    pub fn handle(&mut self, command: Command) -> Result<Option<String>> {
        if command == Command::Quit {
            self.running = false;
            return Ok(None);
        }

        let screen = self.screen.clone();
        let notice = match (&screen, command) {
            (_, Command::Help) => Some(help_text(&screen).to_string()),

            (Screen::Menu, Command::Simulate) => {
                self.season = Some(self.runner.simulate_season()?);
                self.screen = Screen::Standings;
                None
            }
            (Screen::Menu, Command::ViewCurrent) => {
                if self.season.is_some() {
                    self.screen = Screen::Standings;
                    None
                } else {
                    Some("No season simulated yet - run a simulation first.".to_string())
                }
            }

            (Screen::Standings, Command::Back) => {
                self.screen = Screen::Menu;
                None
            }
            (Screen::Standings, Command::SelectPosition(position)) => {
                let team = self
                    .season
                    .as_ref()
                    .and_then(|s| s.table().get(position.wrapping_sub(1)))
                    .map(|row| row.team.clone());
                match team {
                    Some(team) => {
                        self.screen = Screen::TeamDetail { team };
                        None
                    }
                    None => Some(format!("No team at position {position}.")),
                }
            }
            (Screen::Standings, Command::SelectTeam(name)) => {
                let team = self.season.as_ref().and_then(|s| {
                    s.table()
                        .iter()
                        .find(|row| row.team.eq_ignore_ascii_case(&name))
                        .map(|row| row.team.clone())
                });
                match team {
                    Some(team) => {
                        self.screen = Screen::TeamDetail { team };
                        None
                    }
                    None => Some(format!("Unknown team '{name}'.")),
                }
            }

            (Screen::TeamDetail { .. }, Command::Back) => {
                self.screen = Screen::Standings;
                None
            }

            (screen, _) => Some(format!("Not available here. {}", help_text(screen))),
        };

        Ok(notice)
    }
}

pub fn help_text(screen: &Screen) -> &'static str {
    match screen {
        Screen::Menu => "[s] run new simulation  [v] view current  [q] quit",
        Screen::Standings => "[1-N | team name] team details  [b] back  [q] quit",
        Screen::TeamDetail { .. } => "[b] back to table  [q] quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use season_core::{LeagueData, ScriptedGoals, TeamStats};

    fn app(scores: Vec<u32>) -> App<ScriptedGoals> {
        let league = LeagueData::new(vec![TeamStats::new("A", 10, 20, 10), TeamStats::new("B", 10, 10, 20)]).unwrap();
        App::new(SeasonRunner::new(league, ScriptedGoals::new(scores)), ZoneConfig::default())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse(" s "), Some(Command::Simulate));
        assert_eq!(Command::parse("VIEW"), Some(Command::ViewCurrent));
        assert_eq!(Command::parse("3"), Some(Command::SelectPosition(3)));
        assert_eq!(Command::parse("Aston Villa"), Some(Command::SelectTeam("Aston Villa".into())));
        assert_eq!(Command::parse("q"), Some(Command::Quit));
        assert_eq!(Command::parse("   "), None);
    }

    #[test]
    fn test_menu_to_team_detail_and_back() {
        let mut app = app(vec![2, 1, 3, 0]);
        assert_eq!(app.screen(), &Screen::Menu);
        assert!(!app.simulation_complete());

        assert!(app.handle(Command::ViewCurrent).unwrap().is_some());
        assert_eq!(app.screen(), &Screen::Menu);

        assert_eq!(app.handle(Command::Simulate).unwrap(), None);
        assert_eq!(app.screen(), &Screen::Standings);
        assert_eq!(app.season().unwrap().champion().unwrap().team, "A");

        assert_eq!(app.handle(Command::SelectPosition(2)).unwrap(), None);
        assert_eq!(app.screen(), &Screen::TeamDetail { team: "B".into() });

        app.handle(Command::Back).unwrap();
        assert_eq!(app.screen(), &Screen::Standings);

        app.handle(Command::SelectTeam("a".into())).unwrap();
        assert_eq!(app.screen(), &Screen::TeamDetail { team: "A".into() });

        app.handle(Command::Back).unwrap();
        app.handle(Command::Back).unwrap();
        assert_eq!(app.screen(), &Screen::Menu);

        assert_eq!(app.handle(Command::ViewCurrent).unwrap(), None);
        assert_eq!(app.screen(), &Screen::Standings);
    }

    #[test]
    fn test_bad_selection_stays_put() {
        let mut app = app(vec![1, 1, 1, 1]);
        app.handle(Command::Simulate).unwrap();

        assert!(app.handle(Command::SelectPosition(0)).unwrap().is_some());
        assert!(app.handle(Command::SelectPosition(9)).unwrap().is_some());
        assert!(app.handle(Command::SelectTeam("Z".into())).unwrap().is_some());
        assert!(app.handle(Command::Simulate).unwrap().is_some());
        assert_eq!(app.screen(), &Screen::Standings);
    }

    #[test]
    fn test_failed_run_keeps_previous_season() {
        // Scores for exactly one season
        let mut app = app(vec![2, 1, 3, 0]);
        app.handle(Command::Simulate).unwrap();
        app.handle(Command::Back).unwrap();

        assert!(app.handle(Command::Simulate).is_err());
        assert_eq!(app.screen(), &Screen::Menu);
        assert_eq!(app.season().unwrap().standings_for("A").unwrap().points, 6);
    }

    #[test]
    fn test_quit_from_anywhere() {
        let mut app = app(vec![0, 0, 0, 0]);
        app.handle(Command::Simulate).unwrap();
        app.handle(Command::SelectPosition(1)).unwrap();
        app.handle(Command::Quit).unwrap();
        assert!(!app.is_running());
    }
}
