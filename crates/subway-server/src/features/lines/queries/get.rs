use mediator::Request;
use serde::{Deserialize, Serialize};

use crate::features::lines::types::LineResponse;
use crate::models::{LineId, SectionError};
use crate::store::Store;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetLineQuery {
    pub id: LineId,
}

pub type GetLineResponse = LineResponse;

#[derive(Debug, thiserror::Error)]
pub enum GetLineError {
    #[error("Line '{0}' not found")]
    NotFound(LineId),
    #[error("Line has no path: {0}")]
    Section(#[from] SectionError),
}

impl Request<Result<GetLineResponse, GetLineError>> for GetLineQuery {}

impl crate::cqrs::middleware::Query for GetLineQuery {}

#[tracing::instrument(skip(store))]
pub async fn handle(store: Store, query: GetLineQuery) -> Result<GetLineResponse, GetLineError> {
    let network = store.read().await;

    let line = network
        .line(query.id)
        .ok_or(GetLineError::NotFound(query.id))?;

    Ok(LineResponse::from_line(line)?)
}
