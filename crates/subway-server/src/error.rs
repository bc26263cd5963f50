//! Application error types
//!
//! Each command and query has its own error enum. [`AppError`] folds them into
//! a handful of categories for callers that drive several handlers in a row,
//! such as the seed import and the CLI.

use thiserror::Error;

use crate::features::lines::{
    CreateLineError, DeleteLineError, GetLineByNameError, GetLineError, ListLinesError,
    UpdateLineError,
};
use crate::features::sections::{AddSectionError, ListSectionsError, RemoveSectionError};
use crate::features::stations::{
    CreateStationError, DeleteStationError, GetStationError, ListStationsError,
};
use crate::models::SectionError;

/// Result type alias for application operations
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Section error: {0}")]
    Section(#[from] SectionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Subway error: {0}")]
    Subway(#[from] subway_common::SubwayError),

    /// A seed document step failed; `context` names the station or line
    #[error("Seed import failed at {context}: {source}")]
    Seed {
        context: String,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    pub fn seed(context: impl Into<String>, source: impl Into<AppError>) -> Self {
        AppError::Seed {
            context: context.into(),
            source: Box::new(source.into()),
        }
    }

    /// Innermost error, skipping seed context
    pub fn root(&self) -> &AppError {
        match self {
            AppError::Seed { source, .. } => source.root(),
            other => other,
        }
    }
}

impl From<CreateStationError> for AppError {
    fn from(err: CreateStationError) -> Self {
        match err {
            CreateStationError::NameValidation(e) => AppError::Validation(e.to_string()),
            e @ CreateStationError::DuplicateName(_) => AppError::Conflict(e.to_string()),
        }
    }
}

impl From<DeleteStationError> for AppError {
    fn from(err: DeleteStationError) -> Self {
        match err {
            e @ DeleteStationError::NotFound(_) => AppError::NotFound(e.to_string()),
            e @ DeleteStationError::InUse { .. } => AppError::Conflict(e.to_string()),
        }
    }
}

impl From<GetStationError> for AppError {
    fn from(err: GetStationError) -> Self {
        AppError::NotFound(err.to_string())
    }
}

impl From<ListStationsError> for AppError {
    fn from(err: ListStationsError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<CreateLineError> for AppError {
    fn from(err: CreateLineError) -> Self {
        match err {
            CreateLineError::Section(e) => AppError::Section(e),
            e @ CreateLineError::StationNotFound(_) => AppError::NotFound(e.to_string()),
            e @ CreateLineError::DuplicateName(_) => AppError::Conflict(e.to_string()),
            e => AppError::Validation(e.to_string()),
        }
    }
}

impl From<UpdateLineError> for AppError {
    fn from(err: UpdateLineError) -> Self {
        match err {
            UpdateLineError::Section(e) => AppError::Section(e),
            e @ UpdateLineError::NotFound(_) => AppError::NotFound(e.to_string()),
            e @ UpdateLineError::DuplicateName(_) => AppError::Conflict(e.to_string()),
            e => AppError::Validation(e.to_string()),
        }
    }
}

impl From<DeleteLineError> for AppError {
    fn from(err: DeleteLineError) -> Self {
        AppError::NotFound(err.to_string())
    }
}

impl From<GetLineError> for AppError {
    fn from(err: GetLineError) -> Self {
        match err {
            GetLineError::Section(e) => AppError::Section(e),
            e @ GetLineError::NotFound(_) => AppError::NotFound(e.to_string()),
        }
    }
}

impl From<GetLineByNameError> for AppError {
    fn from(err: GetLineByNameError) -> Self {
        match err {
            GetLineByNameError::Section(e) => AppError::Section(e),
            e @ GetLineByNameError::NotFound(_) => AppError::NotFound(e.to_string()),
            e @ GetLineByNameError::NameRequired => AppError::Validation(e.to_string()),
        }
    }
}

impl From<ListLinesError> for AppError {
    fn from(err: ListLinesError) -> Self {
        match err {
            ListLinesError::Section(e) => AppError::Section(e),
            e @ ListLinesError::Pagination(_) => AppError::Validation(e.to_string()),
        }
    }
}

impl From<AddSectionError> for AppError {
    fn from(err: AddSectionError) -> Self {
        match err {
            AddSectionError::Section(e) => AppError::Section(e),
            e @ (AddSectionError::LineNotFound(_) | AddSectionError::StationNotFound(_)) => {
                AppError::NotFound(e.to_string())
            },
            e @ AddSectionError::DistanceValidation(_) => AppError::Validation(e.to_string()),
        }
    }
}

impl From<RemoveSectionError> for AppError {
    fn from(err: RemoveSectionError) -> Self {
        match err {
            RemoveSectionError::Section(e) => AppError::Section(e),
            e @ RemoveSectionError::LineNotFound(_) => AppError::NotFound(e.to_string()),
        }
    }
}

impl From<ListSectionsError> for AppError {
    fn from(err: ListSectionsError) -> Self {
        match err {
            ListSectionsError::Section(e) => AppError::Section(e),
            e @ ListSectionsError::LineNotFound(_) => AppError::NotFound(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::validation::NameValidationError;
    use crate::models::{LineId, StationId};

    #[test]
    fn test_feature_errors_map_to_categories() {
        let err: AppError = CreateStationError::DuplicateName("Gangnam".to_string()).into();
        assert!(matches!(err, AppError::Conflict(ref m) if m.contains("Gangnam")));

        let err: AppError = CreateLineError::NameValidation(NameValidationError::Required).into();
        assert!(matches!(err, AppError::Validation(_)));

        let err: AppError = AddSectionError::LineNotFound(LineId::new()).into();
        assert!(matches!(err, AppError::NotFound(_)));

        let err: AppError = RemoveSectionError::Section(SectionError::MinimumChain).into();
        assert!(matches!(err, AppError::Section(SectionError::MinimumChain)));

        let err: AppError = DeleteStationError::NotFound(StationId::new()).into();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_seed_error_names_context() {
        let err = AppError::seed("line 'Green'", SectionError::MinimumChain);

        assert_eq!(
            err.to_string(),
            "Seed import failed at line 'Green': Section error: A line must keep at least one section"
        );
        assert!(matches!(err.root(), AppError::Section(SectionError::MinimumChain)));
    }
}
