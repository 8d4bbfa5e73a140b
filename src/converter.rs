//! Converter strategies and the fallback chain that tries them in order.
//!
//! The default chain shells out to ImageMagick's `convert` first and Inkscape
//! second. Each strategy only has to say whether it produced the PNG; the chain
//! stops at the first one that did.

use crate::error::{AttemptError, FailureReason};
use std::ffi::{OsStr, OsString};
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Stdio};

/// A way of turning one SVG file into a `size` x `size` PNG.
pub trait Converter {
    /// Short name used in reports
    fn name(&self) -> &str;

    /// Writes `output` from `input`. `Ok(())` means the PNG was produced.
    fn attempt(&self, input: &Path, output: &Path, size: u32) -> Result<(), AttemptError>;
}

/// Command-line dialect of a supported external converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    /// ImageMagick: `convert -background transparent -size WxH in out`
    ImageMagick,
    /// Inkscape 1.x: `inkscape --export-type=png --export-width W --export-height H --export-filename out in`
    Inkscape,
}

impl ToolKind {
    pub fn default_program(self) -> &'static str {
        match self {
            ToolKind::ImageMagick => "convert",
            ToolKind::Inkscape => "inkscape",
        }
    }

    /// Builds the argument list for converting `input` into `output`.
    pub fn arguments(self, input: &Path, output: &Path, size: u32) -> Vec<OsString> {
        let size_text = size.to_string();
        match self {
            ToolKind::ImageMagick => vec![
                "-background".into(),
                "transparent".into(),
                "-size".into(),
                format!("{}x{}", size, size).into(),
                input.as_os_str().to_os_string(),
                output.as_os_str().to_os_string(),
            ],
            ToolKind::Inkscape => vec![
                "--export-type=png".into(),
                "--export-width".into(),
                size_text.clone().into(),
                "--export-height".into(),
                size_text.into(),
                "--export-filename".into(),
                output.as_os_str().to_os_string(),
                input.as_os_str().to_os_string(),
            ],
        }
    }
}

/// A converter backed by an external executable.
#[derive(Debug, Clone)]
pub struct ExternalTool {
    kind: ToolKind,
    program: OsString,
    name: String,
}

impl ExternalTool {
    pub fn new(kind: ToolKind) -> Self {
        let program = kind.default_program();
        ExternalTool {
            kind,
            program: program.into(),
            name: program.to_string(),
        }
    }

    /// Tool A
    pub fn imagemagick() -> Self {
        Self::new(ToolKind::ImageMagick)
    }

    /// Tool B
    pub fn inkscape() -> Self {
        Self::new(ToolKind::Inkscape)
    }

    /// Runs `program` instead of the default executable, keeping the argument layout.
    pub fn with_program(mut self, program: impl AsRef<OsStr>) -> Self {
        self.program = program.as_ref().to_os_string();
        self.name = self.program.to_string_lossy().to_string();
        self
    }

    pub fn kind(&self) -> ToolKind {
        self.kind
    }
}

impl Converter for ExternalTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn attempt(&self, input: &Path, output: &Path, size: u32) -> Result<(), AttemptError> {
        // Output is captured so the tool's chatter never reaches the console
        let result = Command::new(&self.program)
            .args(self.kind.arguments(input, output, size))
            .stdin(Stdio::null())
            .output();

        match result {
            Ok(result) if result.status.success() => Ok(()),
            Ok(result) => Err(AttemptError::ToolError {
                tool: self.name.clone(),
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).into_owned(),
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(AttemptError::MissingTool {
                tool: self.name.clone(),
            }),
            Err(e) => Err(AttemptError::Spawn {
                tool: self.name.clone(),
                source: e,
            }),
        }
    }
}

/// Result of running a file through the fallback chain.
#[derive(Debug)]
pub enum ConversionOutcome {
    /// `tool` produced the PNG.
    Converted { tool: String },
    /// Every converter failed. `reason` comes from the last attempt; `attempts`
    /// holds each failure in the order tried.
    Failed {
        reason: FailureReason,
        attempts: Vec<AttemptError>,
    },
}

impl ConversionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionOutcome::Converted { .. })
    }

    pub fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            ConversionOutcome::Converted { .. } => None,
            ConversionOutcome::Failed { reason, .. } => Some(*reason),
        }
    }
}

/// Ordered list of converters, tried until one succeeds.
pub struct FallbackChain {
    converters: Vec<Box<dyn Converter>>,
}

impl FallbackChain {
    pub fn new(converters: Vec<Box<dyn Converter>>) -> Self {
        FallbackChain { converters }
    }

    /// ImageMagick first, then Inkscape.
    pub fn default_tools() -> Self {
        Self::new(vec![
            Box::new(ExternalTool::imagemagick()),
            Box::new(ExternalTool::inkscape()),
        ])
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// Names of the converters in the order they are tried
    pub fn names(&self) -> Vec<&str> {
        self.converters.iter().map(|c| c.name()).collect()
    }

    /// Converts `svg_path` into `png_path`, falling through the chain on any failure.
    ///
    /// Converters after the first successful one are never invoked. An empty
    /// chain reports `MissingTool`.
    pub fn convert(&self, svg_path: &Path, png_path: &Path, size: u32) -> ConversionOutcome {
        let mut attempts = Vec::new();

        for converter in &self.converters {
            match converter.attempt(svg_path, png_path, size) {
                Ok(()) => {
                    return ConversionOutcome::Converted {
                        tool: converter.name().to_string(),
                    }
                }
                Err(e) => attempts.push(e),
            }
        }

        let reason = attempts
            .last()
            .map(AttemptError::reason)
            .unwrap_or(FailureReason::MissingTool);
        ConversionOutcome::Failed { reason, attempts }
    }
}

impl Default for FallbackChain {
    fn default() -> Self {
        Self::default_tools()
    }
}
