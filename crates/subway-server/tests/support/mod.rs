//! Shared setup for subway integration tests
//!
//! Builds networks through the public command handlers so the tests see the
//! same behavior as any other caller.

use subway_server::features::lines::{self, CreateLineCommand, LineResponse};
use subway_server::features::sections::{self, AddSectionCommand, RemoveSectionCommand};
use subway_server::features::stations::{self, CreateStationCommand};
use subway_server::models::{LineId, StationId};
use subway_server::store::Store;
use subway_server::AppResult;

/// Store plus name-based shortcuts over the handlers
pub struct TestNetwork {
    pub store: Store,
}

impl TestNetwork {
    pub fn new() -> Self {
        Self {
            store: Store::default(),
        }
    }

    pub async fn station(&self, name: &str) -> AppResult<StationId> {
        let command = CreateStationCommand {
            name: name.to_string(),
        };
        Ok(stations::commands::create::handle(self.store.clone(), command).await?.id)
    }

    pub async fn stations(&self, names: &[&str]) -> AppResult<Vec<StationId>> {
        let mut ids = Vec::with_capacity(names.len());
        for name in names {
            ids.push(self.station(name).await?);
        }
        Ok(ids)
    }

    pub async fn line(
        &self,
        name: &str,
        up: StationId,
        down: StationId,
        distance: u32,
    ) -> AppResult<LineResponse> {
        let command = CreateLineCommand {
            name: name.to_string(),
            color: "bg-green-600".to_string(),
            up_station_id: up,
            down_station_id: down,
            distance,
        };
        Ok(lines::commands::create::handle(self.store.clone(), command).await?)
    }

    pub async fn add_section(
        &self,
        line_id: LineId,
        up: StationId,
        down: StationId,
        distance: u32,
    ) -> AppResult<LineResponse> {
        let command = AddSectionCommand {
            line_id,
            up_station_id: up,
            down_station_id: down,
            distance,
        };
        Ok(sections::commands::add::handle(self.store.clone(), command).await?)
    }

    pub async fn remove_station(&self, line_id: LineId, station_id: StationId) -> AppResult<LineResponse> {
        let command = RemoveSectionCommand { line_id, station_id };
        Ok(sections::commands::remove::handle(self.store.clone(), command).await?)
    }
}
