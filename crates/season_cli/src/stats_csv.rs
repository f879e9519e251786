//! Team stats loader - league table CSV → `TeamStats`
//!
//! Reads the season-aggregate table exported from FBref-style league
//! pages. Only four columns are used, matched by header name:
//! `Squad` (or `Team`), `MP`, `GF`, `GA`. Every other column (Rk, W, D, L,
//! xG, attendance, ...) is ignored.
//!
//! Any malformed row fails the whole load; a partial league would make
//! the simulated table meaningless.

use anyhow::{Context, Result};
use season_core::{LeagueData, SeasonError, TeamStats};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct StatsRow {
    #[serde(rename = "Squad", alias = "Team", alias = "squad", alias = "team")]
    squad: String,
    #[serde(rename = "MP")]
    matches_played: u32,
    #[serde(rename = "GF")]
    goals_for: u32,
    #[serde(rename = "GA")]
    goals_against: u32,
}

impl From<StatsRow> for TeamStats {
    fn from(row: StatsRow) -> Self {
        TeamStats::new(row.squad, row.matches_played, row.goals_for, row.goals_against)
    }
}

/// Parse team stats from any CSV source with a header row.
pub fn read_team_stats<R: Read>(source: R) -> Result<Vec<TeamStats>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut teams = Vec::new();
    for (i, row) in reader.deserialize::<StatsRow>().enumerate() {
        // Line 1 is the header
        let line = i + 2;
        let row = row.map_err(|e| SeasonError::invalid_input(format!("line {line}: malformed stats row: {e}")))?;
        teams.push(TeamStats::from(row));
    }

    log::debug!("Parsed {} team rows", teams.len());
    Ok(teams)
}

/// Read team stats from a CSV file.
pub fn load_team_stats(csv_path: &Path) -> Result<Vec<TeamStats>> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open stats CSV: {}", csv_path.display()))?;
    read_team_stats(file).with_context(|| format!("Failed to parse stats CSV: {}", csv_path.display()))
}

/// Read and validate a league in one step.
pub fn load_league(csv_path: &Path) -> Result<LeagueData> {
    let teams = load_team_stats(csv_path)?;
    let league = LeagueData::new(teams)
        .with_context(|| format!("Invalid league data in {}", csv_path.display()))?;
    log::info!("Loaded {} teams from {}", league.len(), csv_path.display());
    Ok(league)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FBREF_SAMPLE: &str = "\
Rk,Squad,MP,W,D,L,GF,GA,GD,Pts
1,Liverpool,38,25,9,4,86,41,+45,84
2,Arsenal,38,20,14,4,69,34,+35,74
3,Ipswich Town,38,4,10,24,36,82,-46,22
";

    #[test]
    fn test_reads_fbref_columns() -> Result<()> {
        let teams = read_team_stats(FBREF_SAMPLE.as_bytes())?;

        assert_eq!(teams.len(), 3);
        assert_eq!(teams[0], TeamStats::new("Liverpool", 38, 86, 41));
        assert_eq!(teams[2].name, "Ipswich Town");
        assert_eq!(teams[2].goals_against, 82);
        Ok(())
    }

    #[test]
    fn test_team_header_alias_and_whitespace() -> Result<()> {
        let csv = "Team, MP, GF, GA\n Everton , 38, 42, 44\nFulham,38,54,54\n";
        let teams = read_team_stats(csv.as_bytes())?;
        assert_eq!(teams[0], TeamStats::new("Everton", 38, 42, 44));
        Ok(())
    }

    #[test]
    fn test_malformed_row_is_invalid_input() {
        let csv = "Squad,MP,GF,GA\nArsenal,38,69,34\nChelsea,thirty,64,43\n";
        let err = read_team_stats(csv.as_bytes()).unwrap_err();

        let season_err = err.downcast_ref::<SeasonError>().expect("classified as SeasonError");
        assert!(matches!(season_err, SeasonError::InvalidInput(msg) if msg.contains("line 3")));
    }

    #[test]
    fn test_missing_column() {
        let csv = "Squad,MP,GF\nArsenal,38,69\n";
        assert!(read_team_stats(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_load_league_from_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(FBREF_SAMPLE.as_bytes())?;

        let league = load_league(file.path())?;
        assert_eq!(league.len(), 3);
        assert_eq!(league.team("Arsenal").unwrap().goals_for, 69);
        Ok(())
    }

    #[test]
    fn test_load_league_rejects_zero_matches() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(b"Squad,MP,GF,GA\nArsenal,38,69,34\nNewcomers,0,0,0\n")?;

        let err = load_league(file.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SeasonError>(),
            Some(SeasonError::UndefinedRate { team }) if team == "Newcomers"
        ));
        Ok(())
    }

    #[test]
    fn test_bundled_premier_league_data() -> Result<()> {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/PLdata.csv");
        let league = load_league(&path)?;

        assert_eq!(league.len(), 20);
        assert!(league.teams().iter().all(|t| t.matches_played == 38));
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        assert!(load_team_stats(Path::new("/no/such/PLdata.csv")).is_err());
    }
}
