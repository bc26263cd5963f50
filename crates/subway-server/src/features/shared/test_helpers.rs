//! Test helpers and fixtures for handler tests
//!
//! # Examples
//!
//! ```rust,ignore
//! use subway_server::features::shared::test_helpers::*;
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let store = Store::default();
//!     let pangyo = TestStation::new("Pangyo").insert(&store).await;
//!     let jeongja = TestStation::new("Jeongja").insert(&store).await;
//!     let line = TestLine::new("Shinbundang", &pangyo, &jeongja, 10)
//!         .insert(&store)
//!         .await;
//!     // ... test logic ...
//! }
//! ```

use crate::models::{Line, Section, Station, StationId};
use crate::store::Store;

/// Builder for creating test stations
#[derive(Debug, Clone)]
pub struct TestStation {
    pub id: StationId,
    pub name: String,
}

impl TestStation {
    pub fn new(name: &str) -> Self {
        Self {
            id: StationId::new(),
            name: name.to_string(),
        }
    }

    pub fn with_id(mut self, id: StationId) -> Self {
        self.id = id;
        self
    }

    pub fn build(self) -> Station {
        Station::with_id(self.id, self.name)
    }

    /// Insert the station into the store
    pub async fn insert(self, store: &Store) -> Station {
        let station = self.build();
        store.write().await.insert_station(station.clone());
        station
    }
}

/// Builder for creating test lines
#[derive(Debug, Clone)]
pub struct TestLine {
    pub name: String,
    pub color: String,
    pub up_station: Station,
    pub down_station: Station,
    pub distance: u32,
}

impl TestLine {
    pub fn new(name: &str, up_station: &Station, down_station: &Station, distance: u32) -> Self {
        Self {
            name: name.to_string(),
            color: "bg-red-600".to_string(),
            up_station: up_station.clone(),
            down_station: down_station.clone(),
            distance,
        }
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = color.to_string();
        self
    }

    /// Build the line
    ///
    /// # Panics
    ///
    /// When the initial section is invalid; fixtures are expected to be valid.
    pub fn build(self) -> Line {
        let initial = Section::new(self.up_station, self.down_station, self.distance)
            .unwrap_or_else(|e| panic!("invalid fixture section: {e}"));
        Line::new(self.name, self.color, initial)
    }

    /// Insert the line into the store
    pub async fn insert(self, store: &Store) -> Line {
        let line = self.build();
        store.write().await.insert_line(line.clone());
        line
    }
}
