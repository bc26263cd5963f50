use mediator::Request;
use serde::{Deserialize, Serialize};

use crate::features::sections::types::SectionResponse;
use crate::models::{LineId, SectionError};
use crate::store::Store;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSectionsQuery {
    pub line_id: LineId,
}

/// A line's sections in path order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSectionsResponse {
    pub line_id: LineId,
    pub sections: Vec<SectionResponse>,
    pub total_distance: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum ListSectionsError {
    #[error("Line '{0}' not found")]
    LineNotFound(LineId),
    #[error("Line has no path: {0}")]
    Section(#[from] SectionError),
}

impl Request<Result<ListSectionsResponse, ListSectionsError>> for ListSectionsQuery {}

impl crate::cqrs::middleware::Query for ListSectionsQuery {}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: Store,
    query: ListSectionsQuery,
) -> Result<ListSectionsResponse, ListSectionsError> {
    let network = store.read().await;

    let line = network
        .line(query.line_id)
        .ok_or(ListSectionsError::LineNotFound(query.line_id))?;

    let sections = line
        .sections()
        .ordered_sections()?
        .into_iter()
        .map(SectionResponse::from)
        .collect();

    Ok(ListSectionsResponse {
        line_id: query.line_id,
        sections,
        total_distance: line.total_distance(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::sections::commands::add::{self, AddSectionCommand};
    use crate::features::shared::test_helpers::{TestLine, TestStation};

    #[tokio::test]
    async fn test_handle_lists_sections_in_path_order() {
        let store = Store::default();
        let a = TestStation::new("A").insert(&store).await;
        let b = TestStation::new("B").insert(&store).await;
        let c = TestStation::new("C").insert(&store).await;
        let line = TestLine::new("Green", &a, &b, 10).insert(&store).await;
        add::handle(
            store.clone(),
            AddSectionCommand {
                line_id: line.id(),
                up_station_id: a.id(),
                down_station_id: c.id(),
                distance: 4,
            },
        )
        .await
        .unwrap();

        let response = handle(store, ListSectionsQuery { line_id: line.id() })
            .await
            .unwrap();

        let edges: Vec<(&str, &str, u32)> = response
            .sections
            .iter()
            .map(|s| (s.up_station.name.as_str(), s.down_station.name.as_str(), s.distance))
            .collect();
        assert_eq!(edges, vec![("A", "C", 4), ("C", "B", 6)]);
        assert_eq!(response.total_distance, 10);
    }

    #[tokio::test]
    async fn test_handle_unknown_line() {
        let result = handle(Store::default(), ListSectionsQuery { line_id: LineId::new() }).await;
        assert!(matches!(result, Err(ListSectionsError::LineNotFound(_))));
    }
}
