//! Validation context and shared field-access helpers
//!
//! Copyright (c) 2025 Filesocial Team
//! Licensed under the Apache-2.0 license

use crate::validation::error::{ErrorKind, ValidationError, ValidationResult};
use serde_json::{Map, Value};

/// Tracks where in a document validation currently is
#[derive(Debug, Clone)]
pub struct ValidationContext {
    /// Source label (file path or document id) used for error attribution
    pub source: String,
    /// Current JSON path
    pub path: String,
}

impl ValidationContext {
    /// Create a root context for a document
    pub fn new<S: Into<String>>(source: S) -> Self {
        Self {
            source: source.into(),
            path: "$".to_string(),
        }
    }

    /// Create a child context with updated path
    pub fn child<P: AsRef<str>>(&self, segment: P) -> Self {
        let path = if self.path == "$" {
            format!("$.{}", segment.as_ref())
        } else {
            format!("{}.{}", self.path, segment.as_ref())
        };

        Self {
            source: self.source.clone(),
            path,
        }
    }

    /// Create a child context for an array index
    pub fn child_index(&self, index: usize) -> Self {
        Self {
            source: self.source.clone(),
            path: format!("{}[{}]", self.path, index),
        }
    }

    /// Build an error attributed to this location
    pub fn error<M: Into<String>>(&self, kind: ErrorKind, message: M) -> ValidationError {
        ValidationError::new(&self.source, &self.path, kind, message)
    }
}

/// Helper functions for common field checks
///
/// Accessors return the typed value or a specific error variant; values are
/// never coerced. Presence means "key exists in the mapping" - a null value
/// still counts as present.
pub struct ValidationHelpers;

impl ValidationHelpers {
    /// Require a key to exist, independent of its value
    pub fn require<'a>(
        obj: &'a Map<String, Value>,
        key: &str,
        ctx: &ValidationContext,
    ) -> ValidationResult<&'a Value> {
        obj.get(key).ok_or_else(|| {
            ctx.error(
                ErrorKind::MissingField(key.to_string()),
                format!("missing required field '{}'", key),
            )
        })
    }

    /// Require a key to exist and hold an object
    pub fn require_object<'a>(
        obj: &'a Map<String, Value>,
        key: &str,
        ctx: &ValidationContext,
    ) -> ValidationResult<&'a Map<String, Value>> {
        let value = Self::require(obj, key, ctx)?;
        value.as_object().ok_or_else(|| {
            ctx.child(key).error(
                ErrorKind::InvalidFieldType(key.to_string()),
                format!("'{}' must be an object, found {}", key, type_name(value)),
            )
        })
    }

    /// A field participates in path/url selection only as a non-empty string
    pub fn non_empty_str<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
        match obj.get(key).and_then(Value::as_str) {
            Some("") | None => None,
            Some(s) => Some(s),
        }
    }

    /// Whether a post or comment is a tombstone (`deleted` is exactly `true`)
    pub fn is_tombstone(obj: &Map<String, Value>) -> bool {
        matches!(obj.get("deleted"), Some(Value::Bool(true)))
    }
}

/// Short JSON type name for expected-vs-found messages
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_validation_context_child() {
        let context = ValidationContext::new("a.json");
        let child = context.child("avatar");
        assert_eq!(child.path, "$.avatar");
        assert_eq!(child.source, "a.json");

        let grandchild = child.child("path");
        assert_eq!(grandchild.path, "$.avatar.path");
    }

    #[test]
    fn test_validation_context_child_index() {
        let context = ValidationContext::new("a.json").child("attachments");
        let indexed = context.child_index(0);
        assert_eq!(indexed.path, "$.attachments[0]");
    }

    #[test]
    fn test_require_counts_null_as_present() {
        let ctx = ValidationContext::new("a.json");
        let record = obj(json!({"content": null}));

        assert!(ValidationHelpers::require(&record, "content", &ctx).is_ok());

        let missing = ValidationHelpers::require(&record, "author_id", &ctx).unwrap_err();
        assert_eq!(missing.kind, ErrorKind::MissingField("author_id".to_string()));
    }

    #[test]
    fn test_require_object_rejects_null() {
        let ctx = ValidationContext::new("a.json");
        let record = obj(json!({"content": null}));

        let error = ValidationHelpers::require_object(&record, "content", &ctx).unwrap_err();
        assert_eq!(error.kind, ErrorKind::InvalidFieldType("content".to_string()));
        assert_eq!(error.path, "$.content");
    }

    #[test]
    fn test_non_empty_str() {
        let record = obj(json!({"path": "media/a.png", "url": "", "mime": 7}));

        assert_eq!(
            ValidationHelpers::non_empty_str(&record, "path"),
            Some("media/a.png")
        );
        assert_eq!(ValidationHelpers::non_empty_str(&record, "url"), None);
        assert_eq!(ValidationHelpers::non_empty_str(&record, "mime"), None);
        assert_eq!(ValidationHelpers::non_empty_str(&record, "absent"), None);
    }

    #[test]
    fn test_is_tombstone_requires_exact_true() {
        assert!(ValidationHelpers::is_tombstone(&obj(json!({"deleted": true}))));
        assert!(!ValidationHelpers::is_tombstone(&obj(json!({"deleted": false}))));
        assert!(!ValidationHelpers::is_tombstone(&obj(json!({"deleted": "true"}))));
        assert!(!ValidationHelpers::is_tombstone(&obj(json!({"deleted": 1}))));
        assert!(!ValidationHelpers::is_tombstone(&obj(json!({}))));
    }
}
