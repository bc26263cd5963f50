//! Shared validation utilities
//!
//! Input checks used by station, line and section commands before they touch
//! the store.
//!
//! # Examples
//!
//! ```rust,ignore
//! use subway_server::features::shared::validation::{validate_color, validate_name};
//!
//! validate_name("Shinbundang", limits.max_name_length)?;
//! validate_color("bg-red-600", limits.max_color_length)?;
//! ```

use thiserror::Error;

/// Errors that can occur during name validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NameValidationError {
    #[error("Name is required and cannot be empty")]
    Required,

    #[error("Name must be between 1 and {max_length} characters")]
    TooLong { max_length: usize },

    #[error("Name cannot start or end with whitespace")]
    UntrimmedWhitespace,
}

/// Errors that can occur during color validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorValidationError {
    #[error("Color is required and cannot be empty")]
    Required,

    #[error("Color must be between 1 and {max_length} characters")]
    TooLong { max_length: usize },

    #[error("Color cannot contain whitespace")]
    InvalidFormat,
}

/// Errors that can occur during distance validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DistanceValidationError {
    #[error("Distance must be greater than zero")]
    NonPositive,
}

/// Validate a station or line name
///
/// # Rules
/// - Must not be empty (after trimming whitespace)
/// - Must not carry leading or trailing whitespace
/// - Must not exceed `max_length` characters
pub fn validate_name(name: &str, max_length: usize) -> Result<(), NameValidationError> {
    if name.trim().is_empty() {
        return Err(NameValidationError::Required);
    }

    if name.trim() != name {
        return Err(NameValidationError::UntrimmedWhitespace);
    }

    if name.chars().count() > max_length {
        return Err(NameValidationError::TooLong { max_length });
    }

    Ok(())
}

/// Validate a line color such as `bg-red-600`
///
/// # Rules
/// - Must not be empty
/// - Must be a single token: no whitespace anywhere
/// - Must not exceed `max_length` characters
pub fn validate_color(color: &str, max_length: usize) -> Result<(), ColorValidationError> {
    if color.is_empty() {
        return Err(ColorValidationError::Required);
    }

    if color.chars().any(char::is_whitespace) {
        return Err(ColorValidationError::InvalidFormat);
    }

    if color.chars().count() > max_length {
        return Err(ColorValidationError::TooLong { max_length });
    }

    Ok(())
}

#[inline]
pub fn validate_distance(distance: u32) -> Result<(), DistanceValidationError> {
    if distance == 0 {
        return Err(DistanceValidationError::NonPositive);
    }
    Ok(())
}
