//! Custom error types for cdbudget
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for cdbudget operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input and data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// No entity matched a lookup
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A name search matched more than one entity
    #[error("Ambiguous {entity_type} '{query}' matches: {}", candidates.join(", "))]
    AmbiguousMatch {
        entity_type: &'static str,
        query: String,
        candidates: Vec<String>,
    },

    /// Arithmetic over a zero-length period or a zero allocation
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BudgetError {
    /// Create a "not found" error for monthly categories
    pub fn monthly_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Monthly category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for fixed categories
    pub fn fixed_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Fixed category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an ambiguous-match error
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::AmbiguousMatch { .. })
    }

    /// Check if this is a division-by-zero error
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for cdbudget operations
pub type BudgetResult<T> = Result<T, BudgetError>;
