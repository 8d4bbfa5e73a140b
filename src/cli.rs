use crate::config::{ConvertConfig, DEFAULT_ROOT, DEFAULT_SIZE};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "svg2png-batch",
    version,
    about = "Convert every SVG under a directory to a fixed-size PNG using ImageMagick or Inkscape.",
    long_about = r#"svg2png-batch walks a directory tree, finds every file ending in '.svg' and writes
a square PNG next to it.

CONVERTERS (tried in order, per file):
  1. ImageMagick  convert -background transparent -size WxH <in> <out>
  2. Inkscape     inkscape --export-type=png --export-width W --export-height H --export-filename <out> <in>

If ImageMagick is missing or fails, Inkscape is tried. If both fail the file is
reported as failed and the run moves on. The program always exits 0 once the
run has started."#,
    after_help = r##"EXAMPLES:
    svg2png-batch                           # Convert client/src/assets at 400x400
    svg2png-batch public/icons              # Convert a different directory
    svg2png-batch public/icons --size 64    # 64x64 PNGs

NOTES:
- Only names ending in lowercase '.svg' are picked up
- The output path replaces the first '.svg' in the path with '.png'
- Existing PNGs are overwritten
- Converter output is captured and not shown"##
)]
pub struct Cli {
    /// Directory to scan for SVG files
    #[arg(
        value_name = "DIR",
        default_value = DEFAULT_ROOT,
        help = "Directory to scan recursively for .svg files"
    )]
    pub root: PathBuf,

    /// Width and height of the generated PNGs
    #[arg(
        short = 's',
        long,
        value_name = "PIXELS",
        default_value_t = DEFAULT_SIZE,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Output width and height in pixels"
    )]
    pub size: u32,
}

impl Cli {
    pub fn into_config(self) -> ConvertConfig {
        ConvertConfig::new(self.root, self.size)
    }
}
