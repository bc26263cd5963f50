use mediator::Request;
use serde::{Deserialize, Serialize};

use crate::models::StationId;
use crate::store::Store;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteStationCommand {
    pub id: StationId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteStationResponse {
    pub id: StationId,
    pub deleted: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteStationError {
    #[error("Station '{0}' not found")]
    NotFound(StationId),
    #[error("Cannot delete station '{station}': it is on line '{line}'")]
    InUse { station: StationId, line: String },
}

impl Request<Result<DeleteStationResponse, DeleteStationError>> for DeleteStationCommand {}

impl crate::cqrs::middleware::Command for DeleteStationCommand {}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: Store,
    command: DeleteStationCommand,
) -> Result<DeleteStationResponse, DeleteStationError> {
    let mut network = store.write().await;

    if network.station(command.id).is_none() {
        return Err(DeleteStationError::NotFound(command.id));
    }

    if let Some(line) = network.line_serving(command.id) {
        return Err(DeleteStationError::InUse {
            station: command.id,
            line: line.name().to_string(),
        });
    }

    network.remove_station(command.id);

    tracing::info!(station_id = %command.id, "Station deleted");

    Ok(DeleteStationResponse {
        id: command.id,
        deleted: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{TestLine, TestStation};

    #[tokio::test]
    async fn test_handle_deletes_station() {
        let store = Store::default();
        let station = TestStation::new("Yeoksam").insert(&store).await;

        let response = handle(store.clone(), DeleteStationCommand { id: station.id() })
            .await
            .unwrap();

        assert!(response.deleted);
        assert_eq!(store.read().await.station_count(), 0);
    }

    #[tokio::test]
    async fn test_handle_not_found() {
        let store = Store::default();
        let id = StationId::new();

        let result = handle(store, DeleteStationCommand { id }).await;
        assert!(matches!(result, Err(DeleteStationError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_handle_station_in_use() {
        let store = Store::default();
        let gangnam = TestStation::new("Gangnam").insert(&store).await;
        let yangjae = TestStation::new("Yangjae").insert(&store).await;
        TestLine::new("Shinbundang", &gangnam, &yangjae, 10)
            .insert(&store)
            .await;

        let result = handle(store.clone(), DeleteStationCommand { id: gangnam.id() }).await;

        assert!(matches!(result, Err(DeleteStationError::InUse { ref line, .. }) if line == "Shinbundang"));
        assert_eq!(store.read().await.station_count(), 2);
    }
}
