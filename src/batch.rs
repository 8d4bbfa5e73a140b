//! Batch driver: discover SVGs, convert each one, tally the results.

use crate::config::ConvertConfig;
use crate::converter::{ConversionOutcome, FallbackChain};
use crate::discovery::{discover, png_path_for};
use crate::error::FailureReason;
use crate::logger::Logger;
use std::path::{Path, PathBuf};

/// What happened to one discovered file.
#[derive(Debug)]
pub struct FileReport {
    pub svg_path: PathBuf,
    pub png_path: PathBuf,
    pub outcome: ConversionOutcome,
}

/// Per-file results of a whole run, in discovery order.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub reports: Vec<FileReport>,
}

impl RunSummary {
    /// Number of SVG files discovered (each was attempted once)
    pub fn found(&self) -> usize {
        self.reports.len()
    }

    pub fn succeeded(&self) -> usize {
        self.reports.iter().filter(|r| r.outcome.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.found() - self.succeeded()
    }

    /// File names of failed conversions with their reason tags
    pub fn failures(&self) -> Vec<(String, FailureReason)> {
        self.reports
            .iter()
            .filter_map(|r| {
                r.outcome
                    .failure_reason()
                    .map(|reason| (r.svg_path.display().to_string(), reason))
            })
            .collect()
    }
}

/// Converts one file through `chain` and prints its result line.
pub fn convert_file(chain: &FallbackChain, svg_path: &Path, size: u32) -> FileReport {
    let png_path = png_path_for(svg_path);
    let outcome = chain.convert(svg_path, &png_path, size);

    match &outcome {
        ConversionOutcome::Converted { .. } => Logger::converted(svg_path, &png_path),
        ConversionOutcome::Failed { .. } => Logger::conversion_failed(svg_path),
    }

    FileReport {
        svg_path: svg_path.to_path_buf(),
        png_path,
        outcome,
    }
}

/// Warning to show when `root` cannot be scanned, if any.
pub fn root_warning(root: &Path) -> Option<String> {
    if !root.exists() {
        Some(format!("Directory not found: {}", root.display()))
    } else if !root.is_dir() {
        Some(format!("Not a directory: {}", root.display()))
    } else {
        None
    }
}

/// Converts every `.svg` under `config.root` to a `config.size` square PNG.
///
/// Files are processed one at a time in discovery order. Individual failures
/// never abort the run; they are printed and returned in the summary.
pub fn run(config: &ConvertConfig, chain: &FallbackChain) -> RunSummary {
    if let Some(warning) = root_warning(&config.root) {
        Logger::warning(&warning);
    }

    let svg_files = discover(&config.root);
    Logger::found(svg_files.len());

    let reports = svg_files
        .iter()
        .map(|svg_path| convert_file(chain, svg_path, config.size))
        .collect();
    let summary = RunSummary { reports };

    Logger::summary(summary.succeeded(), summary.found());
    Logger::failures(&summary.failures());
    summary
}
