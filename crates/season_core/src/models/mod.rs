// Season data model: inputs, fixtures, results, standings

pub mod fixture;
pub mod match_result;
pub mod season;
pub mod standings;
pub mod team;

pub use fixture::Fixture;
pub use match_result::{MatchOutcome, MatchResult, POINTS_DRAW, POINTS_LOSS, POINTS_WIN};
pub use season::SeasonResult;
pub use standings::{MatchLogEntry, StandingsRow, TableZone};
pub use team::{LeagueData, TeamStats, MAX_GOALS_PER_MATCH};
