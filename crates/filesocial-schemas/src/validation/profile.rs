//! Profile record rules
//!
//! Copyright (c) 2025 Filesocial Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::{type_name, ValidationContext, ValidationHelpers};
use crate::validation::error::{ErrorKind, ValidationResult};
use crate::validation::media;
use serde_json::{Map, Value};

/// Validate a profile record (envelope already checked)
pub(crate) fn validate_profile(
    obj: &Map<String, Value>,
    ctx: &ValidationContext,
) -> ValidationResult<()> {
    for key in ["display_name", "handle"] {
        ValidationHelpers::require(obj, key, ctx)?;
    }

    // a present `avatar: null` counts as "no avatar"; the shape check only
    // applies once the null guard has passed
    match obj.get("avatar") {
        None | Some(Value::Null) => Ok(()),
        Some(Value::Object(avatar)) => media::validate_media_ref(avatar, &ctx.child("avatar")),
        Some(other) => Err(ctx.child("avatar").error(
            ErrorKind::InvalidFieldType("avatar".to_string()),
            format!("avatar must be an object, found {}", type_name(other)),
        )),
    }
}
