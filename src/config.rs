//! Run configuration.

use std::path::PathBuf;

/// Directory scanned when none is given.
pub const DEFAULT_ROOT: &str = "client/src/assets";

/// Width and height of the generated PNGs, in pixels.
pub const DEFAULT_SIZE: u32 = 400;

/// Settings for one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Directory searched recursively for `.svg` files
    pub root: PathBuf,
    /// Square output size (`size` x `size`)
    pub size: u32,
}

impl ConvertConfig {
    pub fn new(root: impl Into<PathBuf>, size: u32) -> Self {
        ConvertConfig {
            root: root.into(),
            size,
        }
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT, DEFAULT_SIZE)
    }
}
