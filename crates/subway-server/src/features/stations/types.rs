use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Station, StationId};

/// A station as returned by station commands and queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationResponse {
    pub id: StationId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Station> for StationResponse {
    fn from(station: &Station) -> Self {
        Self {
            id: station.id(),
            name: station.name().to_string(),
            created_at: station.created_at(),
        }
    }
}
