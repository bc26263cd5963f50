//! Shared pagination utilities
//!
//! Common pagination types for list queries over the in-memory store.
//!
//! # Examples
//!
//! ```rust,ignore
//! use subway_server::features::shared::pagination::{Paginated, PaginationParams};
//!
//! let params = PaginationParams::new(Some(2), Some(20));
//! params.validate()?;
//! let page = Paginated::from_sorted(all_items, &params);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default page size.
pub const DEFAULT_PER_PAGE: usize = 20;

/// Largest page size a caller may ask for.
pub const MAX_PER_PAGE: usize = 100;

/// Errors for out-of-range pagination parameters
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Page must be greater than 0")]
    InvalidPage,

    #[error("Per page must be between 1 and 100")]
    InvalidPerPage,
}

/// Common pagination request parameters
///
/// Defaults to page 1 with 20 items per page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct PaginationParams {
    /// Page number (1-indexed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<usize>,
}

impl PaginationParams {
    pub fn new(page: Option<usize>, per_page: Option<usize>) -> Self {
        Self { page, per_page }
    }

    /// Page number, defaulting to 1
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    /// Items per page, defaulting to 20 and clamped to 1-100
    pub fn per_page(&self) -> usize {
        self.per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE)
    }

    pub fn offset(&self) -> usize {
        (self.page() - 1).saturating_mul(self.per_page())
    }

    pub fn validate(&self) -> Result<(), PaginationError> {
        if self.page == Some(0) {
            return Err(PaginationError::InvalidPage);
        }
        if let Some(per_page) = self.per_page {
            if !(1..=MAX_PER_PAGE).contains(&per_page) {
                return Err(PaginationError::InvalidPerPage);
            }
        }
        Ok(())
    }
}

/// Pagination metadata for response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMetadata {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMetadata {
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let pages = total.div_ceil(per_page.max(1));

        Self {
            page,
            per_page,
            total,
            pages,
            has_next: page < pages,
            has_prev: page > 1,
        }
    }
}

/// One page of a list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: PaginationMetadata,
}

impl<T> Paginated<T> {
    /// Cut the requested page out of an already sorted list
    pub fn from_sorted(items: Vec<T>, params: &PaginationParams) -> Self {
        let total = items.len();
        let items = items
            .into_iter()
            .skip(params.offset())
            .take(params.per_page())
            .collect();

        Self {
            items,
            pagination: PaginationMetadata::new(params.page(), params.per_page(), total),
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_params_defaults() {
        let params = PaginationParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.per_page(), 20);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_pagination_params_clamping() {
        let params = PaginationParams::new(Some(0), Some(500));
        assert_eq!(params.page(), 1);
        assert_eq!(params.per_page(), 100);
    }

    #[test]
    fn test_pagination_params_validation() {
        assert!(PaginationParams::new(Some(1), Some(50)).validate().is_ok());
        assert_eq!(
            PaginationParams::new(Some(0), None).validate(),
            Err(PaginationError::InvalidPage)
        );
        assert_eq!(
            PaginationParams::new(None, Some(101)).validate(),
            Err(PaginationError::InvalidPerPage)
        );
    }

    #[test]
    fn test_from_sorted_cuts_page() {
        let params = PaginationParams::new(Some(2), Some(2));
        let page = Paginated::from_sorted(vec![1, 2, 3, 4, 5], &params);

        assert_eq!(page.items, vec![3, 4]);
        assert_eq!(page.pagination.total, 5);
        assert_eq!(page.pagination.pages, 3);
        assert!(page.pagination.has_next);
        assert!(page.pagination.has_prev);
    }

    #[test]
    fn test_from_sorted_past_the_end() {
        let params = PaginationParams::new(Some(9), Some(10));
        let page = Paginated::from_sorted(vec!["a"], &params);

        assert!(page.items.is_empty());
        assert!(!page.pagination.has_next);
    }

    #[test]
    fn test_pagination_metadata_empty() {
        let meta = PaginationMetadata::new(1, 10, 0);
        assert_eq!(meta.pages, 0);
        assert!(!meta.has_prev);
        assert!(!meta.has_next);
    }

    #[test]
    fn test_paginated_map() {
        let page = Paginated::from_sorted(vec![1, 2, 3], &PaginationParams::default());
        let mapped = page.map(|x| x * 2);
        assert_eq!(mapped.items, vec![2, 4, 6]);
        assert_eq!(mapped.pagination.total, 3);
    }
}
