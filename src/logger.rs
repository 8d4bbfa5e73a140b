//! Console output for svg2png-batch
//!
//! Every line goes to stdout with a colored marker:
//! - INFO: General information (blue)
//! - SUCCESS: A file was converted (green)
//! - WARNING: Non-critical issues (yellow)
//! - FAILURE: A file could not be converted (red)

use crate::error::FailureReason;
use colored::*;
use std::path::Path;

/// Static printer used by the batch driver
pub struct Logger;

impl Logger {
    /// Print application header
    pub fn header(version: &str) {
        println!("{}", "═".repeat(80).bright_blue());
        println!(
            "  {} {}",
            "SVG → PNG".bright_white().bold(),
            format!("v{}", version).bright_blue()
        );
        println!("  {}", "Batch Asset Rasterizer".bright_black());
        println!("{}", "═".repeat(80).bright_blue());
    }

    /// Print a general information message
    pub fn info(message: &str) {
        println!("  {} {}", "●".bright_blue(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        println!("  {} {}", "⚠".bright_yellow(), message.yellow());
    }

    /// Print a sub-item message (indented)
    pub fn detail(message: &str) {
        println!("    · {}", message.bright_black());
    }

    /// Text of the discovery line
    pub fn found_message(count: usize) -> String {
        format!("Found {} SVG files to convert", count)
    }

    /// Text of the per-file success line
    pub fn converted_message(svg_path: &Path, png_path: &Path) -> String {
        format!("Converted {} -> {}", svg_path.display(), png_path.display())
    }

    /// Text of the per-file failure line
    pub fn failed_message(svg_path: &Path) -> String {
        format!(
            "Failed to convert {} - no suitable converter found",
            svg_path.display()
        )
    }

    /// Text of the final tally
    pub fn summary_message(converted: usize, total: usize) -> String {
        format!("Successfully converted {}/{} files", converted, total)
    }

    /// Print how many SVG files were discovered
    pub fn found(count: usize) {
        Self::info(&Self::found_message(count));
    }

    /// Print a successful conversion
    pub fn converted(svg_path: &Path, png_path: &Path) {
        println!(
            "  {} {}",
            "✓".bright_green(),
            Self::converted_message(svg_path, png_path).bright_white()
        );
    }

    /// Print a failed conversion. Stays on stdout so per-file lines keep their order.
    pub fn conversion_failed(svg_path: &Path) {
        println!(
            "  {} {}",
            "✗".bright_red(),
            Self::failed_message(svg_path).red()
        );
    }

    /// Print the final tally
    pub fn summary(converted: usize, total: usize) {
        let message = Self::summary_message(converted, total);
        let message = if converted == total {
            message.bright_green()
        } else {
            message.bright_yellow()
        };
        println!("\n  {} {}", "●".bright_blue(), message);
    }

    /// Print detailed failure list with reason tags
    pub fn failures(failures: &[(String, FailureReason)]) {
        if failures.is_empty() {
            return;
        }

        println!("\n  {} Failed conversions:", "✗".bright_red().bold());
        for (i, (file, reason)) in failures.iter().enumerate() {
            println!(
                "    {}. {} {} {}",
                (i + 1).to_string().bright_red(),
                file.bright_white(),
                "→".bright_black(),
                reason.to_string().red()
            );
        }
    }
}
