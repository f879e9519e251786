//! JSON export of a simulated season with run metadata.

use anyhow::{Context, Result};
use season_core::{SeasonResponse, SeasonResult, ZoneConfig};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Seed of the run, if it was seeded
    pub seed: Option<u64>,
    /// SHA256 of the serialized season (hex)
    pub checksum: String,
    /// Creation time (RFC3339)
    pub generated_at: String,
    pub engine_version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeasonExport {
    pub metadata: ExportMetadata,
    pub season: SeasonResponse,
}

pub fn season_checksum(season: &SeasonResponse) -> Result<String> {
    let bytes = serde_json::to_vec(season).context("Failed to serialize season")?;
    Ok(format!("{:x}", Sha256::digest(&bytes)))
}

pub fn build_export(season: &SeasonResult, seed: Option<u64>, zones: &ZoneConfig) -> Result<SeasonExport> {
    let season = SeasonResponse::from_season(seed, season, zones);
    let checksum = season_checksum(&season)?;

    Ok(SeasonExport {
        metadata: ExportMetadata {
            seed,
            checksum,
            generated_at: chrono::Utc::now().to_rfc3339(),
            engine_version: season_core::VERSION.to_string(),
        },
        season,
    })
}

pub fn write_export(path: &Path, export: &SeasonExport) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(export).context("Failed to serialize export")?;
    fs::write(path, json).with_context(|| format!("Failed to write export file: {}", path.display()))?;
    log::info!("Season exported to {}", path.display());
    Ok(())
}

/// Re-hash the season in an export file and compare with its metadata.
pub fn verify_export(path: &Path) -> Result<bool> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read export file: {}", path.display()))?;
    let export: SeasonExport = serde_json::from_str(&content).context("Failed to parse export")?;
    Ok(season_checksum(&export.season)? == export.metadata.checksum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use season_core::{LeagueData, SeasonRunner, TeamStats};
    use tempfile::tempdir;

    fn season(seed: u64) -> SeasonResult {
        let league = LeagueData::new(vec![
            TeamStats::new("Arsenal", 38, 91, 29),
            TeamStats::new("Chelsea", 38, 77, 63),
            TeamStats::new("Everton", 38, 40, 51),
        ])
        .unwrap();
        SeasonRunner::seeded(league, seed).simulate_season().unwrap()
    }

    #[test]
    fn test_checksum_matches_for_same_seed() -> Result<()> {
        let zones = ZoneConfig::default();
        let a = build_export(&season(11), Some(11), &zones)?;
        let b = build_export(&season(11), Some(11), &zones)?;
        assert_eq!(a.metadata.checksum, b.metadata.checksum);
        assert_eq!(a.metadata.checksum.len(), 64);
        Ok(())
    }

    #[test]
    fn test_write_and_verify() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out").join("season.json");

        let export = build_export(&season(3), Some(3), &ZoneConfig::default())?;
        write_export(&path, &export)?;
        assert!(verify_export(&path)?);

        // Tamper with the stored champion
        let content = fs::read_to_string(&path)?;
        let champion = &export.season.champion;
        let tampered = content.replacen(&format!("\"champion\": \"{champion}\""), "\"champion\": \"Nobody\"", 1);
        assert_ne!(content, tampered);
        fs::write(&path, tampered)?;
        assert!(!verify_export(&path)?);
        Ok(())
    }
}
