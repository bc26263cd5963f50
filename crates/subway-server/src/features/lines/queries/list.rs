use mediator::Request;
use serde::{Deserialize, Serialize};

use crate::features::lines::types::LineResponse;
use crate::features::shared::pagination::{Paginated, PaginationError, PaginationParams};
use crate::models::{Line, SectionError};
use crate::store::Store;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListLinesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<usize>,
}

pub type ListLinesResponse = Paginated<LineResponse>;

#[derive(Debug, thiserror::Error)]
pub enum ListLinesError {
    #[error("Invalid pagination: {0}")]
    Pagination(#[from] PaginationError),
    #[error("Line has no path: {0}")]
    Section(#[from] SectionError),
}

impl Request<Result<ListLinesResponse, ListLinesError>> for ListLinesQuery {}

impl crate::cqrs::middleware::Query for ListLinesQuery {}

impl ListLinesQuery {
    fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page, self.per_page)
    }

    pub fn validate(&self) -> Result<(), ListLinesError> {
        self.pagination().validate()?;
        Ok(())
    }
}

/// Lists lines ordered by name, each with its stations in path order
#[tracing::instrument(skip(store))]
pub async fn handle(store: Store, query: ListLinesQuery) -> Result<ListLinesResponse, ListLinesError> {
    query.validate()?;

    let network = store.read().await;

    let mut lines: Vec<&Line> = network.lines().collect();
    lines.sort_by(|a, b| a.name().cmp(b.name()));

    let items = lines
        .into_iter()
        .map(LineResponse::from_line)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Paginated::from_sorted(items, &query.pagination()))
}
