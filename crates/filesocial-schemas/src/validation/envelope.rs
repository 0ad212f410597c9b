//! Envelope rules shared by every record kind
//!
//! Copyright (c) 2025 Filesocial Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::{type_name, ValidationContext, ValidationHelpers};
use crate::validation::error::{ErrorKind, ValidationResult};
use serde_json::{Map, Value};
use std::fmt;

/// Interchange format name every document must declare
pub const SPEC_NAME: &str = "file-social";

/// Interchange format version every document must declare (exact match,
/// no version-range semantics)
pub const SPEC_VERSION: &str = "0.1";

/// The three record kinds the format defines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    Profile,
    Post,
    Comment,
}

impl RecordType {
    /// All recognized record kinds
    pub const ALL: [RecordType; 3] = [RecordType::Profile, RecordType::Post, RecordType::Comment];

    /// Resolve a declared `type` string to a record kind
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "profile" => Some(RecordType::Profile),
            "post" => Some(RecordType::Post),
            "comment" => Some(RecordType::Comment),
            _ => None,
        }
    }

    /// The `type` literal for this record kind
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Profile => "profile",
            RecordType::Post => "post",
            RecordType::Comment => "comment",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The interchange-format identity a document must claim conformance to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecIdentity {
    pub name: String,
    pub version: String,
}

impl Default for SpecIdentity {
    fn default() -> Self {
        Self {
            name: SPEC_NAME.to_string(),
            version: SPEC_VERSION.to_string(),
        }
    }
}

/// Apply the envelope gates in order and resolve the record kind
///
/// Order is normative: field presence, `spec` shape, exact identity match,
/// then the `type` literal. The first violation is returned.
pub(crate) fn validate_envelope(
    obj: &Map<String, Value>,
    identity: &SpecIdentity,
    ctx: &ValidationContext,
) -> ValidationResult<RecordType> {
    for key in ["spec", "type", "id", "created_at"] {
        ValidationHelpers::require(obj, key, ctx)?;
    }

    let spec = ValidationHelpers::require_object(obj, "spec", ctx)?;
    let spec_ctx = ctx.child("spec");
    if spec.get("name").and_then(Value::as_str) != Some(identity.name.as_str()) {
        return Err(spec_ctx.child("name").error(
            ErrorKind::SpecMismatch,
            format!("spec.name must be '{}'", identity.name),
        ));
    }
    if spec.get("version").and_then(Value::as_str) != Some(identity.version.as_str()) {
        return Err(spec_ctx.child("version").error(
            ErrorKind::SpecMismatch,
            format!("spec.version must be '{}'", identity.version),
        ));
    }

    let declared = &obj["type"];
    let found = match declared.as_str() {
        Some(name) => {
            if let Some(record_type) = RecordType::from_name(name) {
                return Ok(record_type);
            }
            format!("'{}'", name)
        }
        None => type_name(declared).to_string(),
    };

    Err(ctx.child("type").error(
        ErrorKind::UnknownType,
        format!("type must be one of comment, post, profile, found {}", found),
    ))
}
