//! Add section command
//!
//! Attaches a new section to a line. The section either splits an existing
//! section that shares one of its endpoints or extends the line past one of
//! its terminals; exactly one of its stations must already be on the line.

use mediator::Request;
use serde::{Deserialize, Serialize};

use crate::features::lines::types::LineResponse;
use crate::features::shared::validation::{validate_distance, DistanceValidationError};
use crate::models::{LineId, Section, SectionError, StationId};
use crate::store::Store;

/// Command to add a section to a line
///
/// # Examples
///
/// ```rust,ignore
/// use subway_server::features::sections::commands::AddSectionCommand;
///
/// // Shinbundang: Gangnam -> Pangyo (10); split it at Yangjae
/// let command = AddSectionCommand {
///     line_id: line.id,
///     up_station_id: gangnam.id,
///     down_station_id: yangjae.id,
///     distance: 4,
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddSectionCommand {
    pub line_id: LineId,
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: u32,
}

pub type AddSectionResponse = LineResponse;

/// Errors that can occur when adding a section
#[derive(Debug, thiserror::Error)]
pub enum AddSectionError {
    #[error("Distance validation failed: {0}")]
    DistanceValidation(#[from] DistanceValidationError),

    #[error("Line '{0}' not found")]
    LineNotFound(LineId),

    #[error("Station '{0}' not found")]
    StationNotFound(StationId),

    #[error("Section rejected: {0}")]
    Section(#[from] SectionError),
}

impl Request<Result<AddSectionResponse, AddSectionError>> for AddSectionCommand {}

impl crate::cqrs::middleware::Command for AddSectionCommand {}

impl AddSectionCommand {
    pub fn validate(&self) -> Result<(), AddSectionError> {
        validate_distance(self.distance)?;
        Ok(())
    }
}

/// Handler function for adding sections
///
/// # Errors
///
/// - `LineNotFound` / `StationNotFound` for unknown ids
/// - `Section` when the line rejects the section: both stations already on
///   the line, neither on the line, or a split whose distance is not
///   strictly shorter than the section being split
#[tracing::instrument(
    skip(store, command),
    fields(
        line_id = %command.line_id,
        up = %command.up_station_id,
        down = %command.down_station_id,
        distance = command.distance
    )
)]
pub async fn handle(
    store: Store,
    command: AddSectionCommand,
) -> Result<AddSectionResponse, AddSectionError> {
    command.validate()?;

    let mut network = store.write().await;

    let up = network
        .station(command.up_station_id)
        .cloned()
        .ok_or(AddSectionError::StationNotFound(command.up_station_id))?;
    let down = network
        .station(command.down_station_id)
        .cloned()
        .ok_or(AddSectionError::StationNotFound(command.down_station_id))?;

    let section = Section::new(up, down, command.distance)?;

    let line = network
        .line_mut(command.line_id)
        .ok_or(AddSectionError::LineNotFound(command.line_id))?;

    line.add_section(section)?;

    tracing::info!(sections = line.sections().len(), "Section added");

    Ok(LineResponse::from_line(line)?)
}
