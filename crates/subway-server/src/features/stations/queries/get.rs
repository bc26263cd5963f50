use mediator::Request;
use serde::{Deserialize, Serialize};

use crate::features::stations::types::StationResponse;
use crate::models::StationId;
use crate::store::Store;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetStationQuery {
    pub id: StationId,
}

pub type GetStationResponse = StationResponse;

#[derive(Debug, thiserror::Error)]
pub enum GetStationError {
    #[error("Station '{0}' not found")]
    NotFound(StationId),
}

impl Request<Result<GetStationResponse, GetStationError>> for GetStationQuery {}

impl crate::cqrs::middleware::Query for GetStationQuery {}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: Store,
    query: GetStationQuery,
) -> Result<GetStationResponse, GetStationError> {
    let network = store.read().await;

    network
        .station(query.id)
        .map(StationResponse::from)
        .ok_or(GetStationError::NotFound(query.id))
}
