//! Comment record rules
//!
//! Copyright (c) 2025 Filesocial Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::{ValidationContext, ValidationHelpers};
use crate::validation::error::ValidationResult;
use serde_json::{Map, Value};

/// Validate a comment record (envelope already checked)
pub(crate) fn validate_comment(
    obj: &Map<String, Value>,
    ctx: &ValidationContext,
) -> ValidationResult<()> {
    // tombstones only need their deletion timestamp
    if ValidationHelpers::is_tombstone(obj) {
        ValidationHelpers::require(obj, "updated_at", ctx)?;
        return Ok(());
    }

    for key in ["author_id", "parent", "content"] {
        ValidationHelpers::require(obj, key, ctx)?;
    }

    // parent only needs `type` and `id` present; no referential check
    let parent = ValidationHelpers::require_object(obj, "parent", ctx)?;
    let parent_ctx = ctx.child("parent");
    for key in ["type", "id"] {
        ValidationHelpers::require(parent, key, &parent_ctx)?;
    }

    ValidationHelpers::require_object(obj, "content", ctx)?;

    Ok(())
}
