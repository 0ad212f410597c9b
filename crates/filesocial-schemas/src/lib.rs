//! Filesocial Schemas - record validation for the file-social format
//!
//! This crate decides whether a decoded JSON document conforms to the
//! file-social interchange format: three record kinds (profile, post,
//! comment) wrapped in a common envelope, optionally referencing external
//! media assets.
//!
//! ## Features
//!
//! - **Envelope Validation**: spec identity, record type, and common fields
//! - **Type-Specific Rules**: per-record-kind field and shape checks
//! - **Media References**: path-or-url exclusivity for avatars/attachments
//! - **Batch Processing**: fail-fast or accumulate-all-errors over many documents
//! - **Detailed Error Reporting**: failure kind, field name, JSON path, source label
//!
//! ## Quick Start
//!
//! ```rust
//! use filesocial_schemas::{create_record_validator, SPEC_NAME, SPEC_VERSION};
//! use serde_json::json;
//!
//! // Create a validator
//! let validator = create_record_validator();
//!
//! // Validate a profile record
//! let record = json!({
//!     "spec": {"name": SPEC_NAME, "version": SPEC_VERSION},
//!     "type": "profile",
//!     "id": "p1",
//!     "created_at": "2024-01-01T00:00:00Z",
//!     "display_name": "Ann",
//!     "handle": "ann"
//! });
//!
//! match validator.validate(&record, "profiles/ann.json") {
//!     Ok(_) => println!("Valid record!"),
//!     Err(e) => println!("Validation error: {}", e),
//! }
//! ```
//!
//! ## Validation order
//!
//! Checks run in a fixed order and the first violation wins:
//!
//! 1. The top-level value must be a JSON object
//! 2. Envelope: `spec`, `type`, `id`, `created_at` present; `spec` is an
//!    object declaring the exact name/version; `type` is a known record kind
//! 3. Type-specific rules for the declared kind
//!
//! Posts and comments with `deleted: true` are tombstones: they only need
//! `updated_at` and skip every other rule.
//!
//! The engine consumes already-decoded `serde_json::Value` trees and never
//! performs I/O; validation is a pure function of its input.
//!
//! Copyright (c) 2025 Filesocial Team
//! Licensed under the Apache-2.0 license

pub mod validation;

// Re-export commonly used types for convenience
pub use validation::{
    create_record_validator, validate_records_batch, ErrorKind, RecordType, RecordValidator,
    SpecIdentity, ValidationConfig, ValidationContext, ValidationError, ValidationErrors,
    ValidationHelpers, ValidationResult, SPEC_NAME, SPEC_VERSION,
};
