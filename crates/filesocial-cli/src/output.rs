//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable) with specialized
//! support for validation errors, check reports, and progress indicators.

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::handlers::check::CheckReport;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use is_terminal::IsTerminal;
use serde::Serialize;
use filesocial_schemas::{ValidationError, ValidationErrors};
use std::io::{self, Write};
use tracing::debug;

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a single validation error
    fn format_validation_error(&self, error: &ValidationError) -> Result<String>;

    /// Format a collection of validation errors
    fn format_validation_errors(&self, errors: &ValidationErrors) -> Result<String>;

    /// Format a batch check report
    fn format_check_report(&self, report: &CheckReport) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_validation_error(&self, error: &ValidationError) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(error)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(error)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(error)?),
            OutputFormat::Human => Ok(format_validation_error_human(error)),
        }
    }

    fn format_validation_errors(&self, errors: &ValidationErrors) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(errors)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(errors)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(errors)?),
            OutputFormat::Human => Ok(format_validation_errors_human(errors)),
        }
    }

    fn format_check_report(&self, report: &CheckReport) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(report)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
            OutputFormat::Human => Ok(format_check_report_human(report)),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    show_progress: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self {
            format,
            use_color,
            show_progress: !quiet && io::stdout().is_terminal(),
            quiet,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    #[allow(dead_code)]
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            show_progress: false, // No progress bars with custom writers
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet {
            return Ok(());
        }

        if self.format == OutputFormat::Human {
            if self.use_color {
                self.writeln(&format!("{} {}", "ℹ".blue(), message))
            } else {
                self.writeln(&format!("INFO: {}", message))
            }
        } else {
            Ok(())
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.format == OutputFormat::Human {
            if self.use_color {
                self.writeln(&message.green().to_string())
            } else {
                self.writeln(message)
            }
        } else {
            Ok(())
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.format == OutputFormat::Human {
            if self.use_color {
                self.writeln(&message.yellow().to_string())
            } else {
                self.writeln(&format!("WARNING: {}", message))
            }
        } else {
            Ok(())
        }
    }

    /// Write an error message
    pub fn error(&mut self, message: &str) -> Result<()> {
        if self.format == OutputFormat::Human {
            if self.use_color {
                self.writeln(&message.red().to_string())
            } else {
                self.writeln(&format!("ERROR: {}", message))
            }
        } else {
            Ok(())
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.format == OutputFormat::Human {
            self.writeln("")?;
            if self.use_color {
                self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
            } else {
                self.writeln(&format!("=== {} ===", title))
            }
        } else {
            Ok(())
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;

        if self.format == OutputFormat::Human {
            self.writeln(&formatted)
        } else {
            self.write(&formatted)
        }
    }

    /// Write a single validation error with specialized formatting
    pub fn validation_error(&mut self, error: &ValidationError) -> Result<()> {
        let formatted = self.format.format_validation_error(error)?;
        self.writeln(&formatted)
    }

    /// Write validation errors with specialized formatting
    #[allow(dead_code)]
    pub fn validation_errors(&mut self, errors: &ValidationErrors) -> Result<()> {
        let formatted = self.format.format_validation_errors(errors)?;
        self.writeln(&formatted)
    }

    /// Write a check report with specialized formatting
    pub fn check_report(&mut self, report: &CheckReport) -> Result<()> {
        let formatted = self.format.format_check_report(report)?;
        self.writeln(&formatted)
    }

    /// Create a progress bar for long operations
    pub fn progress_bar(&self, length: u64, message: &str) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }

        let pb = ProgressBar::new(length);
        pb.set_style(default_progress_style());
        pb.set_message(message.to_string());
        Some(pb)
    }
}

/// Helper function to create a progress bar style
pub fn default_progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap()
        .progress_chars("#>-")
}

/// Format a single validation error for human reading
fn format_validation_error_human(error: &ValidationError) -> String {
    let mut output = String::new();

    output.push_str(&format!("📍 Source: {}\n", error.source_label));
    output.push_str(&format!("🔍 Path: {}\n", error.path));
    output.push_str(&format!("🏷️  Rule: {}\n", error.kind));
    output.push_str(&format!("💬 Message: {}", error.message));

    output
}

/// Format validation errors for human reading
fn format_validation_errors_human(errors: &ValidationErrors) -> String {
    let mut output = String::new();

    output.push_str(&format!("❌ Validation Failed - {} Error(s)\n", errors.len()));

    for (i, error) in errors.errors.iter().enumerate() {
        output.push_str(&format!("\n{}. {}\n", i + 1, error));
        output.push_str(&format!("   Rule: {}\n", error.kind));
    }

    output
}

/// Format a check report for human reading
fn format_check_report_human(report: &CheckReport) -> String {
    let mut output = String::new();

    output.push_str("═══ Check Report ═══\n\n");
    output.push_str(&format!("  Files found: {}\n", report.total));
    output.push_str(&format!("  Files checked: {}\n", report.checked));
    output.push_str(&format!("  Passed: {}\n", report.passed));
    output.push_str(&format!("  Failed: {}\n", report.failed));

    if !report.errors.is_empty() {
        output.push('\n');
        output.push_str(&format_validation_errors_human(&report.errors));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use filesocial_schemas::ErrorKind;

    fn sample_error() -> ValidationError {
        ValidationError::new(
            "posts/bad.json",
            "$.spec.version",
            ErrorKind::SpecMismatch,
            "spec.version must be '0.1'",
        )
    }

    #[test]
    fn test_json_format_round_trips_error() {
        let formatted = OutputFormat::Json
            .format_validation_error(&sample_error())
            .unwrap();
        let parsed: ValidationError = serde_json::from_str(&formatted).unwrap();
        assert_eq!(parsed.source_label, "posts/bad.json");
        assert_eq!(parsed.kind, ErrorKind::SpecMismatch);
    }

    #[test]
    fn test_human_format_mentions_source_and_path() {
        let formatted = OutputFormat::Human
            .format_validation_error(&sample_error())
            .unwrap();
        assert!(formatted.contains("posts/bad.json"));
        assert!(formatted.contains("$.spec.version"));
    }

    #[test]
    fn test_check_report_human_summary() {
        let mut errors = ValidationErrors::new();
        errors.add(sample_error());

        let report = CheckReport {
            total: 3,
            checked: 3,
            passed: 2,
            failed: 1,
            errors,
        };

        let formatted = OutputFormat::Human.format_check_report(&report).unwrap();
        assert!(formatted.contains("Files checked: 3"));
        assert!(formatted.contains("Failed: 1"));
        assert!(formatted.contains("posts/bad.json"));
    }
}
