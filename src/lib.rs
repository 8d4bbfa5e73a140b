//! # svg2png-batch
//!
//! Batch conversion of SVG assets to fixed-size PNGs. The library provides:
//! - Recursive discovery of `.svg` files
//! - Converter strategies backed by external tools (ImageMagick, Inkscape)
//! - A fallback chain that tries converters in order
//! - A batch driver that returns per-file results

pub mod batch;
pub mod cli;
pub mod config;
pub mod converter;
pub mod discovery;
pub mod error;
pub mod logger;

// Re-export commonly used items
pub use batch::{convert_file, run, FileReport, RunSummary};
pub use config::ConvertConfig;
pub use converter::{ConversionOutcome, Converter, ExternalTool, FallbackChain, ToolKind};
pub use discovery::{discover, png_path_for};
pub use error::{AttemptError, FailureReason};
pub use logger::Logger;
