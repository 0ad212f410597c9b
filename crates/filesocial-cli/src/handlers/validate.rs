//! Validation command handler

use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::handlers::utils;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use filesocial_schemas::{create_record_validator, ValidationError};
use std::fs;
use tracing::{debug, error, info, instrument, warn};

/// Handle the validate command
#[instrument(skip(_config, output), fields(file = %args.record.display()))]
pub fn handle_validate(
    args: ValidateArgs,
    _config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let _timer = Timer::with_details("validate_command", &format!("file: {}", args.record.display()));
    info!("Starting validation");
    output.info(&format!("Validating record: {}", args.record.display()))?;

    if !args.record.exists() {
        error!("File not found: {}", args.record.display());
        return Err(Error::FileNotFound {
            path: args.record.clone(),
        });
    }

    debug!("Reading record file");
    let content = fs::read_to_string(&args.record)?;
    debug!("File read successfully, {} bytes", content.len());

    let document = match utils::decode_document(&args.record, &content) {
        Ok(document) => document,
        Err(decode_error) => {
            warn!(rule = %decode_error.kind, "Record is not valid JSON");
            report_failure(output, &decode_error)?;
            return Err(Error::Validation { count: 1 });
        }
    };

    let validator = create_record_validator();
    let source = args.record.display().to_string();

    match validator.validate(&document, &source) {
        Ok(()) => {
            info!("Validation completed successfully");
            output.success("✓ Record is valid")?;

            if args.detailed {
                debug!("Showing record details");
                output.section("Record Details")?;
                output.data(&document)?;
            }

            Ok(())
        }
        Err(validation_error) => {
            warn!(rule = %validation_error.kind, "Validation failed");
            report_failure(output, &validation_error)?;

            if args.detailed {
                debug!("Showing failed record details");
                output.section("Failed Record")?;
                output.data(&document)?;
            }

            Err(Error::Validation { count: 1 })
        }
    }
}

fn report_failure(output: &mut OutputWriter, error: &ValidationError) -> Result<()> {
    output.error("✗ Record validation failed")?;
    output.validation_error(error)
}
