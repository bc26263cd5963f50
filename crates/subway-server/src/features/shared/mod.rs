//! Shared utilities and types for feature modules
//!
//! - **pagination**: list query paging
//! - **validation**: input validation
//! - **test_helpers**: store fixtures (test-only)

pub mod pagination;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;

// Re-export commonly used types
pub use pagination::{Paginated, PaginationError, PaginationMetadata, PaginationParams};
pub use validation::{
    validate_color, validate_distance, validate_name, ColorValidationError,
    DistanceValidationError, NameValidationError,
};
