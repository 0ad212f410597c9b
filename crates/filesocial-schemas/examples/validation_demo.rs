//! Validation demonstration example
//!
//! Copyright (c) 2025 Filesocial Team
//! Licensed under the Apache-2.0 license

use serde_json::json;
use filesocial_schemas::{
    create_record_validator, validate_records_batch, ValidationConfig,
};

fn main() {
    println!("=== file-social Record Validation Demo ===\n");

    demo_single_records();
    println!();
    demo_batch_validation();
}

fn demo_single_records() {
    println!("--- Single Record Validation ---");

    let validator = create_record_validator();

    // Valid profile
    let valid_profile = json!({
        "spec": {"name": "file-social", "version": "0.1"},
        "type": "profile",
        "id": "p1",
        "created_at": "2024-01-01T00:00:00Z",
        "display_name": "Ann",
        "handle": "ann"
    });

    println!("✅ Validating valid profile:");
    match validator.validate(&valid_profile, "profiles/ann.json") {
        Ok(_) => println!("   Valid!"),
        Err(e) => println!("   Error: {}", e),
    }

    // Invalid: wrong spec version
    let wrong_version = json!({
        "spec": {"name": "file-social", "version": "0.2"},
        "type": "profile",
        "id": "p2",
        "created_at": "2024-01-01T00:00:00Z",
        "display_name": "Bea",
        "handle": "bea"
    });

    println!("\n❌ Validating profile declaring spec version 0.2:");
    match validator.validate(&wrong_version, "profiles/bea.json") {
        Ok(_) => println!("   Unexpectedly valid!"),
        Err(e) => println!("   Error: {}", e),
    }

    // Invalid: attachment with an absolute path
    let absolute_attachment = json!({
        "spec": {"name": "file-social", "version": "0.1"},
        "type": "post",
        "id": "r1",
        "created_at": "2024-01-01T00:00:00Z",
        "author_id": "p1",
        "visibility": "public",
        "content": {"text": "hello"},
        "attachments": [{"media_id": "m1", "mime": "image/png", "path": "/etc/passwd"}]
    });

    println!("\n❌ Validating post with absolute attachment path:");
    match validator.validate(&absolute_attachment, "posts/r1.json") {
        Ok(_) => println!("   Unexpectedly valid!"),
        Err(e) => println!("   Error: {}", e),
    }

    // Tombstone: deleted records only need their deletion timestamp
    let tombstone = json!({
        "spec": {"name": "file-social", "version": "0.1"},
        "type": "post",
        "id": "r2",
        "created_at": "2024-01-01T00:00:00Z",
        "deleted": true,
        "updated_at": "2024-02-01T00:00:00Z"
    });

    println!("\n✅ Validating tombstoned post:");
    match validator.validate(&tombstone, "posts/r2.json") {
        Ok(_) => println!("   Valid!"),
        Err(e) => println!("   Error: {}", e),
    }
}

fn demo_batch_validation() {
    println!("--- Batch Validation ---");

    let documents = vec![
        (
            "profiles/ann.json".to_string(),
            json!({
                "spec": {"name": "file-social", "version": "0.1"},
                "type": "profile",
                "id": "p1",
                "created_at": "2024-01-01T00:00:00Z",
                "display_name": "Ann",
                "handle": "ann"
            }),
        ),
        (
            "comments/c1.json".to_string(),
            json!({
                "spec": {"name": "file-social", "version": "0.1"},
                "type": "comment",
                "id": "c1",
                "created_at": "2024-01-01T00:00:00Z",
                "author_id": "p1",
                "parent": {"type": "post"},
                "content": {"text": "nice"}
            }),
        ),
    ];

    println!("🔍 Checking {} documents (accumulate mode):", documents.len());
    match validate_records_batch(&documents, &ValidationConfig::default()) {
        Ok(_) => println!("   All documents valid!"),
        Err(errors) => println!("   {}", errors),
    }
}
