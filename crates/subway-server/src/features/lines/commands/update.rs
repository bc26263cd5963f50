//! Update line command
//!
//! Partially updates an existing line's name and color. Only the fields that
//! are provided will be updated; the line's sections are left unchanged.

use mediator::Request;
use serde::{Deserialize, Serialize};

use crate::config::LimitsConfig;
use crate::features::lines::types::LineResponse;
use crate::features::shared::validation::{
    validate_color, validate_name, ColorValidationError, NameValidationError,
};
use crate::models::{LineId, SectionError};
use crate::store::Store;

/// Command to update an existing line
///
/// At least one of `name` or `color` must be provided.
///
/// # Examples
///
/// ```rust,ignore
/// use subway_server::features::lines::commands::UpdateLineCommand;
///
/// let command = UpdateLineCommand {
///     id: line.id,
///     name: None,  // Keep existing name
///     color: Some("bg-orange-600".to_string()),
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateLineCommand {
    pub id: LineId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

pub type UpdateLineResponse = LineResponse;

/// Errors that can occur when updating a line
#[derive(Debug, thiserror::Error)]
pub enum UpdateLineError {
    /// No fields were provided for update
    #[error("At least one field must be provided for update")]
    NoFieldsToUpdate,
    #[error("Name validation failed: {0}")]
    NameValidation(#[from] NameValidationError),
    #[error("Color validation failed: {0}")]
    ColorValidation(#[from] ColorValidationError),
    #[error("Line '{0}' not found")]
    NotFound(LineId),
    /// Another line already uses the requested name
    #[error("Line with name '{0}' already exists")]
    DuplicateName(String),
    #[error("Line has no path: {0}")]
    Section(#[from] SectionError),
}

impl Request<Result<UpdateLineResponse, UpdateLineError>> for UpdateLineCommand {}

impl crate::cqrs::middleware::Command for UpdateLineCommand {}

impl UpdateLineCommand {
    /// Validates the command parameters
    ///
    /// # Errors
    ///
    /// - `NoFieldsToUpdate` - Neither name nor color provided
    /// - `NameValidation` - Name is empty, padded or too long
    /// - `ColorValidation` - Color is empty, contains whitespace or is too long
    pub fn validate(&self, limits: &LimitsConfig) -> Result<(), UpdateLineError> {
        if self.name.is_none() && self.color.is_none() {
            return Err(UpdateLineError::NoFieldsToUpdate);
        }
        if let Some(ref name) = self.name {
            validate_name(name, limits.max_name_length)?;
        }
        if let Some(ref color) = self.color {
            validate_color(color, limits.max_color_length)?;
        }
        Ok(())
    }
}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: Store,
    command: UpdateLineCommand,
) -> Result<UpdateLineResponse, UpdateLineError> {
    command.validate(&store.limits())?;

    let mut network = store.write().await;

    if network.line(command.id).is_none() {
        return Err(UpdateLineError::NotFound(command.id));
    }

    if let Some(ref name) = command.name {
        let taken = network
            .line_by_name(name)
            .is_some_and(|other| other.id() != command.id);
        if taken {
            return Err(UpdateLineError::DuplicateName(name.clone()));
        }
    }

    let line = network
        .line_mut(command.id)
        .ok_or(UpdateLineError::NotFound(command.id))?;

    if let Some(name) = command.name {
        line.rename(name);
    }
    if let Some(color) = command.color {
        line.recolor(color);
    }

    tracing::info!(line_id = %command.id, "Line updated");

    Ok(LineResponse::from_line(line)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{TestLine, TestStation};

    #[test]
    fn test_validation_requires_a_field() {
        let cmd = UpdateLineCommand {
            id: LineId::new(),
            name: None,
            color: None,
        };
        assert!(matches!(
            cmd.validate(&LimitsConfig::default()),
            Err(UpdateLineError::NoFieldsToUpdate)
        ));
    }

    #[test]
    fn test_validation_rejects_blank_name() {
        let cmd = UpdateLineCommand {
            id: LineId::new(),
            name: Some("  ".to_string()),
            color: None,
        };
        assert!(matches!(
            cmd.validate(&LimitsConfig::default()),
            Err(UpdateLineError::NameValidation(NameValidationError::Required))
        ));
    }

    #[tokio::test]
    async fn test_handle_updates_color_only() {
        let store = Store::default();
        let a = TestStation::new("Gangnam").insert(&store).await;
        let b = TestStation::new("Pangyo").insert(&store).await;
        let line = TestLine::new("Shinbundang", &a, &b, 10).insert(&store).await;

        let response = handle(
            store.clone(),
            UpdateLineCommand {
                id: line.id(),
                name: None,
                color: Some("bg-orange-600".to_string()),
            },
        )
        .await
        .unwrap();

        assert_eq!(response.name, "Shinbundang");
        assert_eq!(response.color, "bg-orange-600");
        assert_eq!(response.station_names(), vec!["Gangnam", "Pangyo"]);
        assert!(response.modified_at >= line.modified_at());
    }

    #[tokio::test]
    async fn test_handle_keeps_own_name() {
        let store = Store::default();
        let a = TestStation::new("Gangnam").insert(&store).await;
        let b = TestStation::new("Pangyo").insert(&store).await;
        let line = TestLine::new("Shinbundang", &a, &b, 10).insert(&store).await;

        let result = handle(
            store,
            UpdateLineCommand {
                id: line.id(),
                name: Some("Shinbundang".to_string()),
                color: None,
            },
        )
        .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_handle_duplicate_name() {
        let store = Store::default();
        let a = TestStation::new("Gangnam").insert(&store).await;
        let b = TestStation::new("Pangyo").insert(&store).await;
        let c = TestStation::new("Jamsil").insert(&store).await;
        TestLine::new("Line 2", &a, &c, 7).insert(&store).await;
        let line = TestLine::new("Shinbundang", &a, &b, 10).insert(&store).await;

        let result = handle(
            store.clone(),
            UpdateLineCommand {
                id: line.id(),
                name: Some("Line 2".to_string()),
                color: None,
            },
        )
        .await;

        assert!(matches!(result, Err(UpdateLineError::DuplicateName(_))));
        let network = store.read().await;
        assert_eq!(network.line(line.id()).map(|l| l.name()), Some("Shinbundang"));
    }

    #[tokio::test]
    async fn test_handle_not_found() {
        let result = handle(
            Store::default(),
            UpdateLineCommand {
                id: LineId::new(),
                name: Some("Ghost".to_string()),
                color: None,
            },
        )
        .await;
        assert!(matches!(result, Err(UpdateLineError::NotFound(_))));
    }
}
