// ABOUTME: Unified error handling with standard error codes for the Vitalog platform
// ABOUTME: Errors only arise at collaborator boundaries: validation, storage, and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Scoring and trend computation are total functions and never fail. The
//! error types here cover the layers around them: form validation, the log
//! repository, and environment configuration.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::io;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation
    /// Input was rejected
    InvalidInput,
    /// A numeric value lies outside its accepted range
    ValueOutOfRange,
    /// Data could not be parsed in the expected format
    InvalidFormat,

    // Resource Management
    /// No record matched the given identifier
    ResourceNotFound,

    // Configuration
    /// A configuration value is present but unusable
    ConfigInvalid,
    /// A required configuration value is absent
    ConfigMissing,

    // Internal Errors
    /// Reading or writing the log store failed
    StorageError,
    /// JSON encoding or decoding failed
    SerializationError,
    /// Anything else
    InternalError,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::InvalidFormat => "The data format is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::ConfigMissing => "Required configuration is missing",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
            Self::InternalError => "An internal error occurred",
        }
    }
}

/// Unified error type for the application
#[derive(Debug)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value outside its accepted range
    #[must_use]
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Storage error
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn Error + 'static))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::storage(error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_description() {
        let error = AppError::not_found("Health log abc");
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert_eq!(
            error.to_string(),
            "The requested resource was not found: Health log abc not found"
        );
    }

    #[test]
    fn test_io_error_chains_source() {
        let error = AppError::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(error.code, ErrorCode::StorageError);
        assert!(Error::source(&error).is_some());
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::ValueOutOfRange).unwrap();
        assert_eq!(json, "\"VALUE_OUT_OF_RANGE\"");
    }
}
