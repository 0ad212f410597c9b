//! Check command handler: validate every record file under a directory

use crate::cli::{CheckArgs, OutputFormat};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::handlers::utils;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use serde::Serialize;
use filesocial_schemas::{create_record_validator, ValidationErrors};
use std::fs;
use tracing::{info, instrument, warn};

/// Aggregate result of a directory check
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Record files discovered
    pub total: usize,
    /// Files actually validated (fewer than `total` when failing fast)
    pub checked: usize,
    /// Files that passed
    pub passed: usize,
    /// Files that failed
    pub failed: usize,
    /// One error record per failing file
    pub errors: ValidationErrors,
}

/// Handle the check command
#[instrument(skip(config, output), fields(keep_going = args.keep_going))]
pub fn handle_check(args: CheckArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let dir = args
        .dir
        .clone()
        .unwrap_or_else(|| config.paths.records_dir.clone());
    let _timer = Timer::with_details("check_command", &format!("dir: {}", dir.display()));

    if !dir.is_dir() {
        return Err(Error::FileNotFound { path: dir });
    }

    let files = utils::discover_records(&dir)?;
    if files.is_empty() {
        return Err(Error::other(format!(
            "no record files found under {}",
            dir.display()
        )));
    }

    info!(count = files.len(), dir = %dir.display(), "Checking record files");
    output.info(&format!("Found {} record files", files.len()))?;

    let progress = output.progress_bar(files.len() as u64, "Checking records...");

    let validator = create_record_validator();
    let mut errors = ValidationErrors::new();
    let mut checked = 0usize;

    for path in &files {
        if let Some(pb) = &progress {
            pb.set_message(path.display().to_string());
        }

        let content = fs::read_to_string(path)?;
        let source = path.display().to_string();
        let result = utils::decode_document(path, &content)
            .and_then(|document| validator.validate(&document, &source));
        checked += 1;

        if let Some(pb) = &progress {
            pb.inc(1);
        }

        if let Err(error) = result {
            warn!(source = %error.source_label, rule = %error.kind, "Record failed validation");
            errors.add(error);

            if !args.keep_going {
                break;
            }

            if args.max_errors > 0 && errors.len() >= args.max_errors {
                break;
            }
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    if checked < files.len() {
        output.warning(&format!(
            "⚠ Stopped early; {} file(s) not checked",
            files.len() - checked
        ))?;
    }

    let report = CheckReport {
        total: files.len(),
        checked,
        passed: checked - errors.len(),
        failed: errors.len(),
        errors,
    };

    match output.format() {
        OutputFormat::Human => {
            if report.failed == 0 {
                output.success(&format!(
                    "✓ All {} records validated successfully",
                    report.checked
                ))?;
            } else {
                output.error("✗ Record check failed")?;
                output.check_report(&report)?;
            }
        }
        _ => output.check_report(&report)?,
    }

    if report.failed == 0 {
        Ok(())
    } else {
        Err(Error::Validation {
            count: report.failed,
        })
    }
}
