//! Post record rules
//!
//! Copyright (c) 2025 Filesocial Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::{type_name, ValidationContext, ValidationHelpers};
use crate::validation::error::{ErrorKind, ValidationResult};
use crate::validation::media;
use serde_json::{Map, Value};

/// Validate a post record (envelope already checked)
pub(crate) fn validate_post(
    obj: &Map<String, Value>,
    ctx: &ValidationContext,
) -> ValidationResult<()> {
    // tombstones only need their deletion timestamp
    if ValidationHelpers::is_tombstone(obj) {
        ValidationHelpers::require(obj, "updated_at", ctx)?;
        return Ok(());
    }

    for key in ["author_id", "visibility", "content"] {
        ValidationHelpers::require(obj, key, ctx)?;
    }
    ValidationHelpers::require_object(obj, "content", ctx)?;

    // a null attachments list normalizes to no attachments
    let attachments = match obj.get("attachments") {
        None | Some(Value::Null) => return Ok(()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(ctx.child("attachments").error(
                ErrorKind::InvalidFieldType("attachments".to_string()),
                format!("attachments must be an array, found {}", type_name(other)),
            ))
        }
    };

    for (index, item) in attachments.iter().enumerate() {
        let item_ctx = ctx.child("attachments").child_index(index);
        let media_ref = item.as_object().ok_or_else(|| {
            item_ctx.error(
                ErrorKind::InvalidFieldType("attachments".to_string()),
                format!("attachment must be an object, found {}", type_name(item)),
            )
        })?;
        media::validate_media_ref(media_ref, &item_ctx)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(value: Value) -> ValidationResult<()> {
        let obj = value.as_object().unwrap().clone();
        validate_post(&obj, &ValidationContext::new("test"))
    }

    fn live_post() -> Value {
        json!({
            "author_id": "p1",
            "visibility": "public",
            "content": {"text": "hello"}
        })
    }

    #[test]
    fn test_live_post_without_attachments() {
        assert!(check(live_post()).is_ok());
    }

    #[test]
    fn test_tombstone_skips_other_fields() {
        let result = check(json!({
            "deleted": true,
            "updated_at": "2024-01-01T00:00:00Z"
        }));
        assert!(result.is_ok());
    }

    #[test]
    fn test_tombstone_requires_updated_at() {
        let error = check(json!({"deleted": true})).unwrap_err();
        assert_eq!(error.kind, ErrorKind::MissingField("updated_at".to_string()));
    }

    #[test]
    fn test_deleted_false_is_live() {
        let mut post = live_post();
        post["deleted"] = json!(false);
        assert!(check(post).is_ok());

        let error = check(json!({"deleted": false})).unwrap_err();
        assert_eq!(error.kind, ErrorKind::MissingField("author_id".to_string()));
    }

    #[test]
    fn test_content_must_be_object() {
        let mut post = live_post();
        post["content"] = json!("hello");
        let error = check(post).unwrap_err();
        assert_eq!(error.kind, ErrorKind::InvalidFieldType("content".to_string()));
    }

    #[test]
    fn test_null_content_fails_type_check_not_presence() {
        let mut post = live_post();
        post["content"] = json!(null);
        let error = check(post).unwrap_err();
        assert_eq!(error.kind, ErrorKind::InvalidFieldType("content".to_string()));
    }

    #[test]
    fn test_null_attachments_normalized_to_empty() {
        let mut post = live_post();
        post["attachments"] = json!(null);
        assert!(check(post).is_ok());
    }

    #[test]
    fn test_attachments_must_be_array() {
        let mut post = live_post();
        post["attachments"] = json!({"media_id": "m1"});
        let error = check(post).unwrap_err();
        assert_eq!(
            error.kind,
            ErrorKind::InvalidFieldType("attachments".to_string())
        );
    }

    #[test]
    fn test_attachment_elements_must_be_objects() {
        let mut post = live_post();
        post["attachments"] = json!(["media/a.png"]);
        let error = check(post).unwrap_err();
        assert_eq!(
            error.kind,
            ErrorKind::InvalidFieldType("attachments".to_string())
        );
        assert_eq!(error.path, "$.attachments[0]");
    }

    #[test]
    fn test_first_invalid_attachment_fails_document() {
        let mut post = live_post();
        post["attachments"] = json!([
            {"media_id": "m1", "mime": "image/png", "path": "a.png"},
            {"media_id": "m2", "mime": "image/png", "path": "/etc/passwd"},
            {"media_id": "m3", "mime": "image/png"}
        ]);
        let error = check(post).unwrap_err();
        assert_eq!(error.kind, ErrorKind::MediaRefAbsolutePath);
        assert_eq!(error.path, "$.attachments[1].path");
    }
}
