//! # Error Types
//!
//! Domain-specific error types for genka-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  genka-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input admission failures                       │
//! │                                                                         │
//! │  genka-cli errors (app)                                                │
//! │  └── ConfigError      - Environment configuration failures             │
//! │                                                                         │
//! │  The cost and label engines never return errors: they are total        │
//! │  over validated input and degrade to zeros or oversize lines.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant names the offending field so the owning application can
//! show it next to the form input.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A recipe references an ingredient the caller could not resolve.
    ///
    /// ## When This Occurs
    /// - A usage row points at an ingredient owned by another store
    /// - The ingredient was deleted between form render and submit
    #[error("Unknown ingredient: {0}")]
    UnknownIngredient(String),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur before anything reaches the engines. The engines trust
/// their input, so every admission rule lives here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Field did not parse as a number.
    #[error("{field} must be a valid number")]
    NotANumber { field: String },

    /// Field did not parse as a whole number.
    #[error("{field} must be a valid integer")]
    NotAnInteger { field: String },

    /// Numeric value is below zero.
    #[error("{field} must be 0 or greater")]
    Negative { field: String },

    /// Value must be at least one.
    ///
    /// ## When This Occurs
    /// - Production quantity of 0 (cost per item would be undefined)
    #[error("{field} must be 1 or greater")]
    MustBePositive { field: String },

    /// A collection that needs at least one entry is empty.
    #[error("{field} must contain at least one entry")]
    Empty { field: String },
}

impl ValidationError {
    /// Returns the name of the field this error refers to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::NotANumber { field }
            | ValidationError::NotAnInteger { field }
            | ValidationError::Negative { field }
            | ValidationError::MustBePositive { field }
            | ValidationError::Empty { field } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
