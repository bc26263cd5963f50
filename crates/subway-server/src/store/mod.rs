//! In-memory network store
//!
//! Holds every station and line of the network. The store is the single
//! owner of the line aggregates: commands take the write lock for their
//! whole check-then-mutate step, so at most one mutation is in flight at a
//! time, while queries share the read lock.
//!
//! # Example
//!
//! ```rust,ignore
//! use subway_server::store::Store;
//!
//! let store = Store::default();
//! assert_eq!(store.read().await.station_count(), 0);
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::LimitsConfig;
use crate::models::{Line, LineId, Station, StationId};

/// Shared handle to the network
#[derive(Debug, Clone, Default)]
pub struct Store {
    network: Arc<RwLock<Network>>,
    limits: LimitsConfig,
}

impl Store {
    pub fn new(limits: LimitsConfig) -> Self {
        Self {
            network: Arc::default(),
            limits,
        }
    }

    pub fn limits(&self) -> LimitsConfig {
        self.limits
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Network> {
        self.network.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Network> {
        self.network.write().await
    }
}

/// Stations and lines, keyed by id
#[derive(Debug, Default)]
pub struct Network {
    stations: HashMap<StationId, Station>,
    lines: HashMap<LineId, Line>,
}

impl Network {
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    pub fn station_by_name(&self, name: &str) -> Option<&Station> {
        self.stations.values().find(|station| station.name() == name)
    }

    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn insert_station(&mut self, station: Station) {
        self.stations.insert(station.id(), station);
    }

    pub fn remove_station(&mut self, id: StationId) -> Option<Station> {
        self.stations.remove(&id)
    }

    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.get(&id)
    }

    pub fn line_mut(&mut self, id: LineId) -> Option<&mut Line> {
        self.lines.get_mut(&id)
    }

    pub fn line_by_name(&self, name: &str) -> Option<&Line> {
        self.lines.values().find(|line| line.name() == name)
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.values()
    }

    /// First line (by name) whose path runs through `station`
    pub fn line_serving(&self, station: StationId) -> Option<&Line> {
        self.lines
            .values()
            .filter(|line| line.contains_station(station))
            .min_by(|a, b| a.name().cmp(b.name()))
    }

    pub fn insert_line(&mut self, line: Line) {
        self.lines.insert(line.id(), line);
    }

    pub fn remove_line(&mut self, id: LineId) -> Option<Line> {
        self.lines.remove(&id)
    }
}
