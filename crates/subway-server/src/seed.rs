//! Network seed import
//!
//! A seed file describes a whole network by name:
//!
//! ```json
//! {
//!   "stations": ["Gangnam", "Yangjae", "Pangyo"],
//!   "lines": [
//!     {
//!       "name": "Shinbundang",
//!       "color": "bg-red-600",
//!       "up": "Gangnam",
//!       "down": "Pangyo",
//!       "distance": 10,
//!       "sections": [{ "up": "Gangnam", "down": "Yangjae", "distance": 4 }]
//!     }
//!   ]
//! }
//! ```
//!
//! The document is applied through the same command handlers as any other
//! caller, in document order, and stops at the first failing step.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use subway_common::SubwayError;

use crate::error::{AppError, AppResult};
use crate::features::lines::CreateLineCommand;
use crate::features::sections::AddSectionCommand;
use crate::features::stations::CreateStationCommand;
use crate::features::{lines, sections, stations};
use crate::models::StationId;
use crate::store::Store;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSeed {
    #[serde(default)]
    pub stations: Vec<String>,
    #[serde(default)]
    pub lines: Vec<LineSeed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSeed {
    pub name: String,
    pub color: String,
    pub up: String,
    pub down: String,
    pub distance: u32,
    /// Added after the initial section, in order
    #[serde(default)]
    pub sections: Vec<SectionSeed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSeed {
    pub up: String,
    pub down: String,
    pub distance: u32,
}

impl NetworkSeed {
    /// Check the document on its own, before any store is touched
    ///
    /// # Errors
    ///
    /// [`SubwayError::InvalidNetwork`] when a station is listed twice.
    pub fn validate(&self) -> Result<(), SubwayError> {
        let mut seen = HashSet::new();
        for name in &self.stations {
            if !seen.insert(name.as_str()) {
                return Err(SubwayError::InvalidNetwork(format!(
                    "station '{name}' is listed more than once"
                )));
            }
        }
        Ok(())
    }
}

/// Counts of what an import created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub stations: usize,
    pub lines: usize,
    pub sections: usize,
}

/// Read, parse and validate a seed file
pub async fn load(path: &Path) -> AppResult<NetworkSeed> {
    let raw = tokio::fs::read_to_string(path).await?;
    let seed: NetworkSeed = serde_json::from_str(&raw).map_err(SubwayError::from)?;
    seed.validate()?;

    tracing::debug!(path = %path.display(), "Seed file parsed");
    Ok(seed)
}

/// Apply a seed document to a store
///
/// # Errors
///
/// [`AppError::Seed`] naming the station or line whose step failed. Steps
/// before the failure stay applied.
#[tracing::instrument(
    skip(store, seed),
    fields(stations = seed.stations.len(), lines = seed.lines.len())
)]
pub async fn apply(store: &Store, seed: &NetworkSeed) -> AppResult<SeedSummary> {
    let mut summary = SeedSummary::default();

    for name in &seed.stations {
        let command = CreateStationCommand { name: name.clone() };
        stations::commands::create::handle(store.clone(), command)
            .await
            .map_err(|e| AppError::seed(format!("station '{name}'"), e))?;
        summary.stations += 1;
    }

    for line in &seed.lines {
        apply_line(store, line, &mut summary)
            .await
            .map_err(|e| AppError::seed(format!("line '{}'", line.name), e))?;
    }

    tracing::info!(
        stations = summary.stations,
        lines = summary.lines,
        sections = summary.sections,
        "Seed applied"
    );

    Ok(summary)
}

async fn apply_line(store: &Store, seed: &LineSeed, summary: &mut SeedSummary) -> AppResult<()> {
    let command = CreateLineCommand {
        name: seed.name.clone(),
        color: seed.color.clone(),
        up_station_id: station_id(store, &seed.up).await?,
        down_station_id: station_id(store, &seed.down).await?,
        distance: seed.distance,
    };
    let line = lines::commands::create::handle(store.clone(), command).await?;
    summary.lines += 1;

    for section in &seed.sections {
        let command = AddSectionCommand {
            line_id: line.id,
            up_station_id: station_id(store, &section.up).await?,
            down_station_id: station_id(store, &section.down).await?,
            distance: section.distance,
        };
        sections::commands::add::handle(store.clone(), command).await?;
        summary.sections += 1;
    }

    Ok(())
}

async fn station_id(store: &Store, name: &str) -> AppResult<StationId> {
    let network = store.read().await;
    network
        .station_by_name(name)
        .map(|station| station.id())
        .ok_or_else(|| AppError::NotFound(format!("Station '{name}' not found")))
}
