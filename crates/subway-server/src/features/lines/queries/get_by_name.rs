use mediator::Request;
use serde::{Deserialize, Serialize};

use crate::features::lines::types::LineResponse;
use crate::models::SectionError;
use crate::store::Store;

/// Looks a line up by its unique name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetLineByNameQuery {
    pub name: String,
}

pub type GetLineByNameResponse = LineResponse;

#[derive(Debug, thiserror::Error)]
pub enum GetLineByNameError {
    #[error("Name is required and cannot be empty")]
    NameRequired,
    #[error("Line '{0}' not found")]
    NotFound(String),
    #[error("Line has no path: {0}")]
    Section(#[from] SectionError),
}

impl Request<Result<GetLineByNameResponse, GetLineByNameError>> for GetLineByNameQuery {}

impl crate::cqrs::middleware::Query for GetLineByNameQuery {}

impl GetLineByNameQuery {
    pub fn validate(&self) -> Result<(), GetLineByNameError> {
        if self.name.trim().is_empty() {
            return Err(GetLineByNameError::NameRequired);
        }
        Ok(())
    }
}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: Store,
    query: GetLineByNameQuery,
) -> Result<GetLineByNameResponse, GetLineByNameError> {
    query.validate()?;

    let network = store.read().await;

    match network.line_by_name(&query.name) {
        Some(line) => Ok(LineResponse::from_line(line)?),
        None => Err(GetLineByNameError::NotFound(query.name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{TestLine, TestStation};

    #[tokio::test]
    async fn test_handle_finds_line() {
        let store = Store::default();
        let a = TestStation::new("Gangnam").insert(&store).await;
        let b = TestStation::new("Pangyo").insert(&store).await;
        let line = TestLine::new("Shinbundang", &a, &b, 10).insert(&store).await;

        let response = handle(
            store,
            GetLineByNameQuery {
                name: "Shinbundang".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(response.id, line.id());
    }

    #[tokio::test]
    async fn test_handle_is_case_sensitive() {
        let store = Store::default();
        let a = TestStation::new("Gangnam").insert(&store).await;
        let b = TestStation::new("Pangyo").insert(&store).await;
        TestLine::new("Shinbundang", &a, &b, 10).insert(&store).await;

        let result = handle(
            store,
            GetLineByNameQuery {
                name: "shinbundang".to_string(),
            },
        )
        .await;

        assert!(matches!(result, Err(GetLineByNameError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_handle_empty_name() {
        let result = handle(
            Store::default(),
            GetLineByNameQuery {
                name: String::new(),
            },
        )
        .await;
        assert!(matches!(result, Err(GetLineByNameError::NameRequired)));
    }
}
