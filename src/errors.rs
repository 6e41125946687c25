// ABOUTME: Unified error handling for the progression engine
// ABOUTME: Defines error codes, AppError, and the AppResult alias used across all modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Progression Engine Contributors

//! # Unified Error Handling
//!
//! The engine distinguishes three failure classes:
//!
//! - **Insufficient data** is not an error. Operations return `Ok(None)` (or
//!   a structured flag from the insights aggregator) so callers can render an
//!   "insufficient data" state.
//! - **Not found**: the referenced exercise/user/tenant combination resolves
//!   to no records at all. Surfaced as [`ErrorCode::ResourceNotFound`].
//! - **Invalid input / numeric degeneracy**: malformed inputs to the
//!   statistical primitives. Analyzers guard against these and fall back to
//!   flat results; the code exists for direct callers of the primitives.
//!
//! Data-access failures from the persistence collaborator propagate
//! unmodified as [`ErrorCode::DatabaseError`].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes emitted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// The provided input is invalid (including degenerate regression input)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// The requested resource was not found
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    /// A data-access operation failed
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError,
    /// An internal error occurred
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get a user-friendly description of this error code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::DatabaseError => "Data access operation failed",
            Self::InternalError => "An internal error occurred",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::ResourceNotFound => "RESOURCE_NOT_FOUND",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        };
        f.write_str(name)
    }
}

/// Unified error type for the engine
#[derive(Debug, Clone, Error)]
#[error("{code}: {message}")]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create an invalid-input error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Create a not-found error for the given resource
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceNotFound, resource)
    }

    /// Create a data-access error
    #[must_use]
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Create an internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Whether this error is a not-found condition
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.code == ErrorCode::ResourceNotFound
    }
}

/// Result alias used throughout the engine
pub type AppResult<T> = Result<T, AppError>;
