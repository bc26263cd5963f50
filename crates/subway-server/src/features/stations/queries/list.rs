use mediator::Request;
use serde::{Deserialize, Serialize};

use crate::features::shared::pagination::{Paginated, PaginationError, PaginationParams};
use crate::features::stations::types::StationResponse;
use crate::models::Station;
use crate::store::Store;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListStationsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<usize>,
    /// Case-insensitive substring filter on the station name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_contains: Option<String>,
}

pub type ListStationsResponse = Paginated<StationResponse>;

#[derive(Debug, thiserror::Error)]
pub enum ListStationsError {
    #[error("Invalid pagination: {0}")]
    Pagination(#[from] PaginationError),
}

impl Request<Result<ListStationsResponse, ListStationsError>> for ListStationsQuery {}

impl crate::cqrs::middleware::Query for ListStationsQuery {}

impl ListStationsQuery {
    fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page, self.per_page)
    }

    pub fn validate(&self) -> Result<(), ListStationsError> {
        self.pagination().validate()?;
        Ok(())
    }

    fn matches(&self, station: &Station) -> bool {
        match self.name_contains {
            Some(ref needle) => station
                .name()
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            None => true,
        }
    }
}

/// Lists stations ordered by name, ties broken by id
#[tracing::instrument(skip(store))]
pub async fn handle(
    store: Store,
    query: ListStationsQuery,
) -> Result<ListStationsResponse, ListStationsError> {
    query.validate()?;

    let network = store.read().await;

    let mut stations: Vec<&Station> = network.stations().filter(|s| query.matches(s)).collect();
    stations.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.id().cmp(&b.id())));

    let items = stations.into_iter().map(StationResponse::from).collect();

    Ok(Paginated::from_sorted(items, &query.pagination()))
}
