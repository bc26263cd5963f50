//! Create station command
//!
//! Registers a new station in the network. Station names are unique, since
//! seed files and the CLI refer to stations by name.

use mediator::Request;
use serde::{Deserialize, Serialize};

use crate::config::LimitsConfig;
use crate::features::shared::validation::{validate_name, NameValidationError};
use crate::features::stations::types::StationResponse;
use crate::models::Station;
use crate::store::Store;

/// Command to create a new station
///
/// # Examples
///
/// ```rust,ignore
/// use subway_server::features::stations::commands::CreateStationCommand;
///
/// let command = CreateStationCommand {
///     name: "Gangnam".to_string(),
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStationCommand {
    /// Display name of the station (must be unique)
    pub name: String,
}

pub type CreateStationResponse = StationResponse;

/// Errors that can occur when creating a station
#[derive(Debug, thiserror::Error)]
pub enum CreateStationError {
    #[error("Name validation failed: {0}")]
    NameValidation(#[from] NameValidationError),

    #[error("Station with name '{0}' already exists")]
    DuplicateName(String),
}

impl Request<Result<CreateStationResponse, CreateStationError>> for CreateStationCommand {}

impl crate::cqrs::middleware::Command for CreateStationCommand {}

impl CreateStationCommand {
    /// Validates the command parameters
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is empty, padded with
    /// whitespace, or longer than `limits.max_name_length`.
    #[tracing::instrument(skip(self), fields(name = %self.name))]
    pub fn validate(&self, limits: &LimitsConfig) -> Result<(), CreateStationError> {
        validate_name(&self.name, limits.max_name_length)?;

        tracing::debug!("Command validation passed");
        Ok(())
    }
}

/// Handler function for creating stations
///
/// # Errors
///
/// - Validation errors if the name is invalid
/// - Duplicate error if a station with the same name exists
#[tracing::instrument(skip(store, command), fields(name = %command.name))]
pub async fn handle(
    store: Store,
    command: CreateStationCommand,
) -> Result<CreateStationResponse, CreateStationError> {
    command.validate(&store.limits())?;

    let mut network = store.write().await;

    if network.station_by_name(&command.name).is_some() {
        return Err(CreateStationError::DuplicateName(command.name));
    }

    let station = Station::new(command.name);
    let response = StationResponse::from(&station);
    network.insert_station(station);

    tracing::info!(station_id = %response.id, "Station created successfully");

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_success() {
        let cmd = CreateStationCommand {
            name: "Gangnam".to_string(),
        };
        assert!(cmd.validate(&LimitsConfig::default()).is_ok());
    }

    #[test]
    fn test_validation_empty_name() {
        let cmd = CreateStationCommand {
            name: String::new(),
        };
        assert!(matches!(
            cmd.validate(&LimitsConfig::default()),
            Err(CreateStationError::NameValidation(NameValidationError::Required))
        ));
    }

    #[test]
    fn test_validation_respects_limits() {
        let limits = LimitsConfig {
            max_name_length: 3,
            ..LimitsConfig::default()
        };
        let cmd = CreateStationCommand {
            name: "Gangnam".to_string(),
        };
        assert!(matches!(
            cmd.validate(&limits),
            Err(CreateStationError::NameValidation(NameValidationError::TooLong { max_length: 3 }))
        ));
    }

    #[tokio::test]
    async fn test_handle_creates_station() {
        let store = Store::default();
        let cmd = CreateStationCommand {
            name: "Gangnam".to_string(),
        };

        let response = handle(store.clone(), cmd).await.unwrap();
        assert_eq!(response.name, "Gangnam");

        let network = store.read().await;
        assert_eq!(network.station(response.id).map(Station::name), Some("Gangnam"));
    }

    #[tokio::test]
    async fn test_handle_duplicate_name() {
        let store = Store::default();
        let cmd = CreateStationCommand {
            name: "Gangnam".to_string(),
        };

        handle(store.clone(), cmd.clone()).await.unwrap();
        let result = handle(store.clone(), cmd).await;

        assert!(matches!(result, Err(CreateStationError::DuplicateName(ref n)) if n == "Gangnam"));
        assert_eq!(store.read().await.station_count(), 1);
    }
}
