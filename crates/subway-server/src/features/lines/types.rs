use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::features::stations::types::StationResponse;
use crate::models::{Line, LineId, SectionError};

/// A line with its stations in path order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineResponse {
    pub id: LineId,
    pub name: String,
    pub color: String,
    pub stations: Vec<StationResponse>,
    pub total_distance: u64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl LineResponse {
    /// # Errors
    ///
    /// Propagates [`SectionError::EmptyChain`] from the line's path walk.
    pub fn from_line(line: &Line) -> Result<Self, SectionError> {
        let stations = line.stations()?;

        Ok(Self {
            id: line.id(),
            name: line.name().to_string(),
            color: line.color().to_string(),
            stations: stations.iter().map(StationResponse::from).collect(),
            total_distance: line.total_distance(),
            created_at: line.created_at(),
            modified_at: line.modified_at(),
        })
    }

    /// Station names in path order
    pub fn station_names(&self) -> Vec<&str> {
        self.stations.iter().map(|s| s.name.as_str()).collect()
    }
}
