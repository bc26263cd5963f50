//! Create line command
//!
//! Creates a line running over a single initial section between two existing
//! stations. Further sections are added through the sections feature.

use mediator::Request;
use serde::{Deserialize, Serialize};

use crate::config::LimitsConfig;
use crate::features::lines::types::LineResponse;
use crate::features::shared::validation::{
    validate_color, validate_distance, validate_name, ColorValidationError,
    DistanceValidationError, NameValidationError,
};
use crate::models::{Line, Section, SectionError, StationId};
use crate::store::Store;

/// Command to create a new line
///
/// # Examples
///
/// ```rust,ignore
/// use subway_server::features::lines::commands::CreateLineCommand;
///
/// let command = CreateLineCommand {
///     name: "Shinbundang".to_string(),
///     color: "bg-red-600".to_string(),
///     up_station_id: gangnam.id,
///     down_station_id: pangyo.id,
///     distance: 10,
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLineCommand {
    /// Display name of the line (must be unique)
    pub name: String,

    /// Color class such as `bg-red-600`
    pub color: String,

    pub up_station_id: StationId,

    pub down_station_id: StationId,

    /// Distance of the initial section
    pub distance: u32,
}

pub type CreateLineResponse = LineResponse;

/// Errors that can occur when creating a line
#[derive(Debug, thiserror::Error)]
pub enum CreateLineError {
    #[error("Name validation failed: {0}")]
    NameValidation(#[from] NameValidationError),

    #[error("Color validation failed: {0}")]
    ColorValidation(#[from] ColorValidationError),

    #[error("Distance validation failed: {0}")]
    DistanceValidation(#[from] DistanceValidationError),

    #[error("Station '{0}' not found")]
    StationNotFound(StationId),

    #[error("Line with name '{0}' already exists")]
    DuplicateName(String),

    #[error("Invalid section: {0}")]
    Section(#[from] SectionError),
}

impl Request<Result<CreateLineResponse, CreateLineError>> for CreateLineCommand {}

impl crate::cqrs::middleware::Command for CreateLineCommand {}

impl CreateLineCommand {
    /// Validates the command parameters
    ///
    /// # Errors
    ///
    /// - Name must be non-empty, unpadded and within `limits.max_name_length`
    /// - Color must be non-empty, without whitespace and within `limits.max_color_length`
    /// - Distance must be greater than zero
    #[tracing::instrument(skip(self), fields(name = %self.name, color = %self.color))]
    pub fn validate(&self, limits: &LimitsConfig) -> Result<(), CreateLineError> {
        validate_name(&self.name, limits.max_name_length)?;
        validate_color(&self.color, limits.max_color_length)?;
        validate_distance(self.distance)?;

        tracing::debug!("Command validation passed");
        Ok(())
    }
}

/// Handler function for creating lines
///
/// # Errors
///
/// - Validation errors if command parameters are invalid
/// - `StationNotFound` if either endpoint is not a registered station
/// - `DuplicateName` if a line with the same name exists
/// - `Section` if the initial section is rejected (same station at both ends)
#[tracing::instrument(
    skip(store, command),
    fields(
        name = %command.name,
        up = %command.up_station_id,
        down = %command.down_station_id,
        distance = command.distance
    )
)]
pub async fn handle(
    store: Store,
    command: CreateLineCommand,
) -> Result<CreateLineResponse, CreateLineError> {
    command.validate(&store.limits())?;

    let mut network = store.write().await;

    let up = network
        .station(command.up_station_id)
        .cloned()
        .ok_or(CreateLineError::StationNotFound(command.up_station_id))?;
    let down = network
        .station(command.down_station_id)
        .cloned()
        .ok_or(CreateLineError::StationNotFound(command.down_station_id))?;

    if network.line_by_name(&command.name).is_some() {
        return Err(CreateLineError::DuplicateName(command.name));
    }

    let initial = Section::new(up, down, command.distance)?;
    let line = Line::new(command.name, command.color, initial);
    let response = LineResponse::from_line(&line)?;
    network.insert_line(line);

    tracing::info!(line_id = %response.id, "Line created successfully");

    Ok(response)
}
