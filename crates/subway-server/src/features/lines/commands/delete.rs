use mediator::Request;
use serde::{Deserialize, Serialize};

use crate::models::LineId;
use crate::store::Store;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteLineCommand {
    pub id: LineId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteLineResponse {
    pub id: LineId,
    pub name: String,
    pub deleted: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteLineError {
    #[error("Line '{0}' not found")]
    NotFound(LineId),
}

impl Request<Result<DeleteLineResponse, DeleteLineError>> for DeleteLineCommand {}

impl crate::cqrs::middleware::Command for DeleteLineCommand {}

/// Deletes a line together with its sections; stations are kept
#[tracing::instrument(skip(store))]
pub async fn handle(
    store: Store,
    command: DeleteLineCommand,
) -> Result<DeleteLineResponse, DeleteLineError> {
    let mut network = store.write().await;

    let line = network
        .remove_line(command.id)
        .ok_or(DeleteLineError::NotFound(command.id))?;

    tracing::info!(line_id = %command.id, name = %line.name(), "Line deleted");

    Ok(DeleteLineResponse {
        id: command.id,
        name: line.name().to_string(),
        deleted: true,
    })
}
