//! Unit tests for post record validation
//!
//! Covers the tombstone short-circuit, live-post required fields, content
//! shape, and attachment media reference rules.

use filesocial_schemas::{create_record_validator, ErrorKind};
use serde_json::{json, Value};

/// Helper to create a minimal valid live post
fn minimal_valid_post() -> Value {
    json!({
        "spec": {"name": "file-social", "version": "0.1"},
        "type": "post",
        "id": "r1",
        "created_at": "2024-01-01T00:00:00Z",
        "author_id": "p1",
        "visibility": "public",
        "content": {"text": "hello"}
    })
}

#[cfg(test)]
mod tombstone_rules {
    use super::*;

    #[test]
    fn test_tombstone_validates_with_only_updated_at() {
        let validator = create_record_validator();
        let record = json!({
            "spec": {"name": "file-social", "version": "0.1"},
            "type": "post",
            "id": "r1",
            "created_at": "2024-01-01T00:00:00Z",
            "deleted": true,
            "updated_at": "2024-01-01T00:00:00Z"
        });

        let result = validator.validate(&record, "r1.json");
        assert!(result.is_ok(), "tombstone should skip live-post rules: {:?}", result);
    }

    #[test]
    fn test_tombstone_missing_updated_at() {
        let validator = create_record_validator();
        let record = json!({
            "spec": {"name": "file-social", "version": "0.1"},
            "type": "post",
            "id": "r1",
            "created_at": "2024-01-01T00:00:00Z",
            "deleted": true
        });

        let error = validator.validate(&record, "r1.json").unwrap_err();
        assert_eq!(error.kind, ErrorKind::MissingField("updated_at".to_string()));
    }

    #[test]
    fn test_non_boolean_deleted_does_not_tombstone() {
        let validator = create_record_validator();
        let mut record = minimal_valid_post();
        record["deleted"] = json!("true");
        record.as_object_mut().unwrap().remove("author_id");

        let error = validator.validate(&record, "r1.json").unwrap_err();
        assert_eq!(error.kind, ErrorKind::MissingField("author_id".to_string()));
    }

    #[test]
    fn test_tombstone_skips_media_ref_checks() {
        let validator = create_record_validator();
        let record = json!({
            "spec": {"name": "file-social", "version": "0.1"},
            "type": "post",
            "id": "r1",
            "created_at": "2024-01-01T00:00:00Z",
            "deleted": true,
            "updated_at": "2024-01-01T00:00:00Z",
            "attachments": [{"path": "/etc/passwd"}]
        });

        assert!(validator.validate(&record, "r1.json").is_ok());
    }
}

#[cfg(test)]
mod live_post_rules {
    use super::*;

    #[test]
    fn test_minimal_live_post_is_valid() {
        let validator = create_record_validator();
        assert!(validator.validate(&minimal_valid_post(), "r1.json").is_ok());
    }

    #[test]
    fn test_missing_visibility() {
        let validator = create_record_validator();
        let mut record = minimal_valid_post();
        record.as_object_mut().unwrap().remove("visibility");

        let error = validator.validate(&record, "r1.json").unwrap_err();
        assert_eq!(error.kind, ErrorKind::MissingField("visibility".to_string()));
    }

    #[test]
    fn test_content_must_be_object() {
        let validator = create_record_validator();
        let mut record = minimal_valid_post();
        record["content"] = json!(["hello"]);

        let error = validator.validate(&record, "r1.json").unwrap_err();
        assert_eq!(error.kind, ErrorKind::InvalidFieldType("content".to_string()));
    }

    #[test]
    fn test_null_content_is_present_but_wrong_type() {
        let validator = create_record_validator();
        let mut record = minimal_valid_post();
        record["content"] = json!(null);

        // null passes the presence gate and fails the shape gate
        let error = validator.validate(&record, "r1.json").unwrap_err();
        assert_eq!(error.kind, ErrorKind::InvalidFieldType("content".to_string()));
    }
}

#[cfg(test)]
mod attachment_rules {
    use super::*;

    fn post_with_attachments(attachments: Value) -> Value {
        let mut record = minimal_valid_post();
        record["attachments"] = attachments;
        record
    }

    #[test]
    fn test_valid_attachments() {
        let validator = create_record_validator();
        let record = post_with_attachments(json!([
            {"media_id": "m1", "mime": "image/png", "path": "media/a.png"},
            {"media_id": "m2", "mime": "video/mp4", "url": "https://cdn.example/b.mp4"}
        ]));

        assert!(validator.validate(&record, "r1.json").is_ok());
    }

    #[test]
    fn test_empty_attachments() {
        let validator = create_record_validator();
        assert!(validator
            .validate(&post_with_attachments(json!([])), "r1.json")
            .is_ok());
    }

    #[test]
    fn test_null_attachments_treated_as_empty() {
        let validator = create_record_validator();
        assert!(validator
            .validate(&post_with_attachments(json!(null)), "r1.json")
            .is_ok());
    }

    #[test]
    fn test_attachments_must_be_array() {
        let validator = create_record_validator();
        let record = post_with_attachments(json!("media/a.png"));

        let error = validator.validate(&record, "r1.json").unwrap_err();
        assert_eq!(
            error.kind,
            ErrorKind::InvalidFieldType("attachments".to_string())
        );
    }

    #[test]
    fn test_absolute_attachment_path_rejected() {
        let validator = create_record_validator();
        let record = post_with_attachments(json!([
            {"media_id": "m1", "mime": "image/png", "path": "/etc/passwd"}
        ]));

        let error = validator.validate(&record, "r1.json").unwrap_err();
        assert_eq!(error.kind, ErrorKind::MediaRefAbsolutePath);
        assert_eq!(error.path, "$.attachments[0].path");
    }

    #[test]
    fn test_attachment_without_path_or_url_rejected() {
        let validator = create_record_validator();
        let record = post_with_attachments(json!([
            {"media_id": "m1", "mime": "image/png"}
        ]));

        let error = validator.validate(&record, "r1.json").unwrap_err();
        assert_eq!(error.kind, ErrorKind::MediaRefAmbiguous);
    }
}
