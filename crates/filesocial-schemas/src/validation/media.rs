//! Media reference rules shared by avatars and attachments
//!
//! Copyright (c) 2025 Filesocial Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::{ValidationContext, ValidationHelpers};
use crate::validation::error::{ErrorKind, ValidationResult};
use serde_json::{Map, Value};

/// Validate a media reference sub-object
///
/// `media_id` and `mime` must be present (any value). Exactly one of
/// `path`/`url` must be a non-empty string: `path` must be relative, `url`
/// must be an absolute http(s) URL.
pub(crate) fn validate_media_ref(
    media: &Map<String, Value>,
    ctx: &ValidationContext,
) -> ValidationResult<()> {
    for key in ["media_id", "mime"] {
        ValidationHelpers::require(media, key, ctx)?;
    }

    let path = ValidationHelpers::non_empty_str(media, "path");
    let url = ValidationHelpers::non_empty_str(media, "url");

    match (path, url) {
        (Some(_), Some(_)) | (None, None) => Err(ctx.error(
            ErrorKind::MediaRefAmbiguous,
            "media reference must include exactly one of 'path' or 'url'",
        )),
        (Some(path), None) => {
            if path.starts_with('/') {
                Err(ctx.child("path").error(
                    ErrorKind::MediaRefAbsolutePath,
                    format!("path must be relative, found '{}'", path),
                ))
            } else {
                Ok(())
            }
        }
        (None, Some(url)) => {
            if url.starts_with("http://") || url.starts_with("https://") {
                Ok(())
            } else {
                Err(ctx.child("url").error(
                    ErrorKind::MediaRefInvalidUrl,
                    format!("url must start with http:// or https://, found '{}'", url),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(value: Value) -> ValidationResult<()> {
        let media = value.as_object().unwrap().clone();
        validate_media_ref(&media, &ValidationContext::new("test"))
    }

    #[test]
    fn test_valid_path_reference() {
        let result = check(json!({
            "media_id": "m1",
            "mime": "image/png",
            "path": "media/avatar.png"
        }));
        assert!(result.is_ok());
    }

    #[test]
    fn test_valid_url_reference() {
        for url in ["http://cdn.example/a.png", "https://cdn.example/a.png"] {
            let result = check(json!({"media_id": "m1", "mime": "image/png", "url": url}));
            assert!(result.is_ok(), "should accept {}", url);
        }
    }

    #[test]
    fn test_missing_media_id() {
        let error = check(json!({"mime": "image/png", "path": "a.png"})).unwrap_err();
        assert_eq!(error.kind, ErrorKind::MissingField("media_id".to_string()));
    }

    #[test]
    fn test_both_path_and_url_is_ambiguous() {
        let error = check(json!({
            "media_id": "m1",
            "mime": "image/png",
            "path": "a.png",
            "url": "https://cdn.example/a.png"
        }))
        .unwrap_err();
        assert_eq!(error.kind, ErrorKind::MediaRefAmbiguous);
    }

    #[test]
    fn test_neither_path_nor_url_is_ambiguous() {
        let error = check(json!({"media_id": "m1", "mime": "image/png"})).unwrap_err();
        assert_eq!(error.kind, ErrorKind::MediaRefAmbiguous);
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        // an empty path next to a real url is not ambiguous
        let result = check(json!({
            "media_id": "m1",
            "mime": "image/png",
            "path": "",
            "url": "https://cdn.example/a.png"
        }));
        assert!(result.is_ok());

        // both empty means neither is usable
        let error = check(json!({
            "media_id": "m1",
            "mime": "image/png",
            "path": "",
            "url": ""
        }))
        .unwrap_err();
        assert_eq!(error.kind, ErrorKind::MediaRefAmbiguous);
    }

    #[test]
    fn test_non_string_path_counts_as_absent() {
        let error = check(json!({"media_id": "m1", "mime": "image/png", "path": 42})).unwrap_err();
        assert_eq!(error.kind, ErrorKind::MediaRefAmbiguous);
    }

    #[test]
    fn test_absolute_path_rejected() {
        let error = check(json!({
            "media_id": "m1",
            "mime": "image/png",
            "path": "/etc/passwd"
        }))
        .unwrap_err();
        assert_eq!(error.kind, ErrorKind::MediaRefAbsolutePath);
        assert_eq!(error.path, "$.path");
    }

    #[test]
    fn test_non_http_url_rejected() {
        let error = check(json!({
            "media_id": "m1",
            "mime": "image/png",
            "url": "ftp://cdn.example/a.png"
        }))
        .unwrap_err();
        assert_eq!(error.kind, ErrorKind::MediaRefInvalidUrl);
    }
}
