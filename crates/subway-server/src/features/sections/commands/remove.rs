//! Remove section command
//!
//! Takes a station off a line. A terminal station drops the one section that
//! touches it; an interior station's two sections are merged into one that
//! spans both distances.

use mediator::Request;
use serde::{Deserialize, Serialize};

use crate::features::lines::types::LineResponse;
use crate::models::{LineId, SectionError, StationId};
use crate::store::Store;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveSectionCommand {
    pub line_id: LineId,
    pub station_id: StationId,
}

pub type RemoveSectionResponse = LineResponse;

#[derive(Debug, thiserror::Error)]
pub enum RemoveSectionError {
    #[error("Line '{0}' not found")]
    LineNotFound(LineId),

    #[error("Section removal rejected: {0}")]
    Section(#[from] SectionError),
}

impl Request<Result<RemoveSectionResponse, RemoveSectionError>> for RemoveSectionCommand {}

impl crate::cqrs::middleware::Command for RemoveSectionCommand {}

/// # Errors
///
/// - `LineNotFound` for an unknown line
/// - `Section(MinimumChain)` when the line has a single section left
/// - `Section(NotFound)` when the station is not on the line
#[tracing::instrument(skip(store))]
pub async fn handle(
    store: Store,
    command: RemoveSectionCommand,
) -> Result<RemoveSectionResponse, RemoveSectionError> {
    let mut network = store.write().await;

    let line = network
        .line_mut(command.line_id)
        .ok_or(RemoveSectionError::LineNotFound(command.line_id))?;

    line.remove_station(command.station_id)?;

    tracing::info!(sections = line.sections().len(), "Station removed from line");

    Ok(LineResponse::from_line(line)?)
}
