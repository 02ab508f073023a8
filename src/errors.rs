// ABOUTME: Unified error handling types for the Nutriplan core
// ABOUTME: Defines validation and authorization errors plus the crate-wide AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Project

//! # Unified Error Handling
//!
//! Three layers of error types:
//!
//! - [`ValidationError`] - raised by the recipe validation pipeline and
//!   propagated unmodified to the caller
//! - [`AuthorizationError`] - raised by the access decorator (and the
//!   caller context); every raise is preceded by a structured log entry
//! - [`AppError`] - the crate-wide error wrapping the above plus opaque
//!   collaborator failures (repository, nutrition lookup)
//!
//! Not-found conditions on reads are represented as `Ok(None)`, never as an
//! error; callers decide how to respond.

use thiserror::Error;

/// Errors raised by the recipe validation pipeline.
///
/// Checks run in a fixed order with first-failure-wins semantics, so a
/// recipe failing several checks reports only the earliest one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Recipe name is empty or whitespace-only
    #[error("recipe name must not be empty")]
    InvalidName,
    /// Recipe has no owner assigned
    #[error("recipe owner is missing")]
    MissingOwner,
    /// Recipe has no components
    #[error("recipe must contain at least one ingredient")]
    EmptyIngredients,
    /// Recipe exceeds the component limit
    #[error("recipe has {count} components, exceeding the limit of {max}")]
    TooManyIngredients {
        /// Number of components on the rejected recipe
        count: usize,
        /// Configured component limit
        max: usize,
    },
    /// Image URL is present but not an absolute http/https URL
    #[error("image URL '{url}' is not an absolute http or https URL")]
    InvalidImageUrl {
        /// The rejected URL as supplied
        url: String,
    },
}

/// Errors raised when a caller is denied access to a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthorizationError {
    /// Caller is authenticated but does not own the target resource
    #[error("caller does not own the requested resource")]
    NotOwner,
    /// No authenticated caller identity is present
    #[error("no authenticated caller identity present")]
    Unauthenticated,
}

/// Unified error type for the crate.
#[derive(Debug, Error)]
pub enum AppError {
    /// Recipe failed a validation check
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Caller was denied access
    #[error(transparent)]
    Authorization(#[from] AuthorizationError),
    /// Repository collaborator failed
    #[error("repository operation failed: {0}")]
    Repository(#[source] anyhow::Error),
    /// Nutrition lookup collaborator failed
    #[error("nutrition lookup failed: {0}")]
    Lookup(#[source] anyhow::Error),
    /// Cache value could not be encoded or decoded
    #[error("cache serialization failed")]
    Serialization(#[from] serde_json::Error),
    /// Unclassified internal failure
    #[error("internal error: {0}")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    /// Repository collaborator failure
    #[must_use]
    pub fn repository(message: impl Into<String>) -> Self {
        Self::Repository(anyhow::anyhow!(message.into()))
    }

    /// Nutrition lookup collaborator failure
    #[must_use]
    pub fn lookup(message: impl Into<String>) -> Self {
        Self::Lookup(anyhow::anyhow!(message.into()))
    }

    /// Unclassified internal failure
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(anyhow::anyhow!(message.into()))
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let error = ValidationError::TooManyIngredients { count: 51, max: 50 };
        assert_eq!(
            error.to_string(),
            "recipe has 51 components, exceeding the limit of 50"
        );
    }

    #[test]
    fn test_app_error_wraps_validation() {
        let error = AppError::from(ValidationError::InvalidName);
        assert!(matches!(
            error,
            AppError::Validation(ValidationError::InvalidName)
        ));
        assert_eq!(error.to_string(), "recipe name must not be empty");
    }

    #[test]
    fn test_app_error_wraps_authorization() {
        let error = AppError::from(AuthorizationError::NotOwner);
        assert!(matches!(
            error,
            AppError::Authorization(AuthorizationError::NotOwner)
        ));
    }
}
