//! Validation error types for file-social records
//!
//! Copyright (c) 2025 Filesocial Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The closed set of ways a document can fail validation
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "field", rename_all = "snake_case")]
pub enum ErrorKind {
    /// Top-level document is not a JSON object
    #[error("top-level JSON must be an object")]
    NotAnObject,

    /// A required key is absent from an object
    #[error("missing required field '{0}'")]
    MissingField(String),

    /// A key is present but its value has the wrong shape
    #[error("field '{0}' has the wrong type")]
    InvalidFieldType(String),

    /// The declared spec name/version does not match the expected constants
    #[error("declared spec name/version does not match")]
    SpecMismatch,

    /// The envelope `type` is not one of the recognized record kinds
    #[error("unrecognized record type")]
    UnknownType,

    /// A media reference carries both or neither of `path`/`url`
    #[error("media reference must include exactly one of 'path' or 'url'")]
    MediaRefAmbiguous,

    /// A media reference `path` starts with `/`
    #[error("media reference path must be relative")]
    MediaRefAbsolutePath,

    /// A media reference `url` lacks an `http://`/`https://` prefix
    #[error("media reference url must be an absolute http(s) URL")]
    MediaRefInvalidUrl,

    /// The input bytes were not valid JSON. Never produced by the engine
    /// itself; the decoding layer reports parse failures under this kind so
    /// a batch run has a uniform error record per document.
    #[error("input is not valid JSON")]
    InvalidJson,
}

/// Validation error with source attribution and path context
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub struct ValidationError {
    /// Source label (file path or document id) the failure is attributed to
    pub source_label: String,
    /// JSON path where the failure was detected
    pub path: String,
    /// Which rule failed
    pub kind: ErrorKind,
    /// Human-readable message with expected-vs-found detail
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: validation error at '{}': {}",
            self.source_label, self.path, self.message
        )
    }
}

impl ValidationError {
    /// Create a new validation error
    pub fn new<S, P, M>(source: S, path: P, kind: ErrorKind, message: M) -> Self
    where
        S: Into<String>,
        P: Into<String>,
        M: Into<String>,
    {
        Self {
            source_label: source.into(),
            path: path.into(),
            kind,
            message: message.into(),
        }
    }

    /// The field name the failure concerns, where the kind carries one
    pub fn field(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::MissingField(name) | ErrorKind::InvalidFieldType(name) => Some(name),
            _ => None,
        }
    }
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Multiple validation errors collected during batch validation
#[derive(Debug, Clone, Default, Error, Serialize, Deserialize)]
pub struct ValidationErrors {
    /// List of validation errors, one per failing document
    pub errors: Vec<ValidationError>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} document(s) failed validation:", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            write!(f, "\n{}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl ValidationErrors {
    /// Create a new validation errors collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error to the collection
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Convert to result - Ok if no errors, Err if any errors exist
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}
