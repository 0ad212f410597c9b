//! Validation module for file-social records
//!
//! This module decides whether a decoded JSON document conforms to the
//! file-social interchange format. Checks run in a fixed order, each a hard
//! gate: top-level shape, envelope (spec identity, record type, common
//! fields), then the rules for the declared record kind. The first
//! violation halts validation of that document; across a batch, documents
//! are isolated from each other.
//!
//! Copyright (c) 2025 Filesocial Team
//! Licensed under the Apache-2.0 license

pub mod base;
pub mod comment;
pub mod envelope;
pub mod error;
pub mod media;
pub mod post;
pub mod profile;

// Re-export commonly used types
pub use base::{ValidationContext, ValidationHelpers};
pub use envelope::{RecordType, SpecIdentity, SPEC_NAME, SPEC_VERSION};
pub use error::{ErrorKind, ValidationError, ValidationErrors, ValidationResult};

use serde_json::Value;

/// Validator for file-social record documents
///
/// Holds the spec identity as immutable data; validation itself is a pure
/// function of the document and carries no state between calls.
#[derive(Debug, Clone, Default)]
pub struct RecordValidator {
    identity: SpecIdentity,
}

impl RecordValidator {
    /// Create a validator for the published spec identity
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator expecting a different spec identity
    pub fn with_identity(identity: SpecIdentity) -> Self {
        Self { identity }
    }

    /// The identity documents must declare
    pub fn identity(&self) -> &SpecIdentity {
        &self.identity
    }

    /// Validate one decoded document, attributing failures to `source`
    pub fn validate(&self, document: &Value, source: &str) -> ValidationResult<()> {
        let context = ValidationContext::new(source);
        self.validate_with_context(document, &context)
    }

    /// Validate with an explicit context (for callers that track paths themselves)
    pub fn validate_with_context(
        &self,
        document: &Value,
        ctx: &ValidationContext,
    ) -> ValidationResult<()> {
        let obj = document
            .as_object()
            .ok_or_else(|| ctx.error(ErrorKind::NotAnObject, "top-level JSON must be an object"))?;

        match envelope::validate_envelope(obj, &self.identity, ctx)? {
            RecordType::Profile => profile::validate_profile(obj, ctx),
            RecordType::Post => post::validate_post(obj, ctx),
            RecordType::Comment => comment::validate_comment(obj, ctx),
        }
    }
}

/// Convenience function to create a record validator
///
/// # Examples
///
/// ```rust
/// use filesocial_schemas::create_record_validator;
/// use serde_json::json;
///
/// let validator = create_record_validator();
/// let record = json!({
///     "spec": {"name": "file-social", "version": "0.1"},
///     "type": "profile",
///     "id": "p1",
///     "created_at": "2024-01-01T00:00:00Z",
///     "display_name": "Ann",
///     "handle": "ann"
/// });
///
/// assert!(validator.validate(&record, "ann.json").is_ok());
/// ```
pub fn create_record_validator() -> RecordValidator {
    RecordValidator::new()
}

/// Validation configuration for batch operations
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Whether to stop on the first failing document or collect all errors
    pub fail_fast: bool,
    /// Maximum number of errors to collect (0 = unlimited)
    pub max_errors: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            max_errors: 0,
        }
    }
}

impl ValidationConfig {
    /// Enable fail-fast mode
    pub fn with_fail_fast(mut self) -> Self {
        self.fail_fast = true;
        self
    }

    /// Set maximum number of errors to collect
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }
}

/// Batch validation over labeled documents
///
/// Each document is validated in isolation; one failure never prevents
/// evaluation of the others unless fail-fast is requested. The result is
/// one error record per failing document.
pub fn validate_records_batch(
    documents: &[(String, Value)],
    config: &ValidationConfig,
) -> Result<(), ValidationErrors> {
    let validator = create_record_validator();
    let mut errors = ValidationErrors::new();

    for (source, document) in documents {
        match validator.validate(document, source) {
            Ok(()) => continue,
            Err(error) => {
                errors.add(error);

                if config.fail_fast {
                    break;
                }

                if config.max_errors > 0 && errors.len() >= config.max_errors {
                    break;
                }
            }
        }
    }

    errors.into_result()
}
