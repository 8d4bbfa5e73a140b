use clap::Parser;
use svg2png_batch::cli::Cli;
use svg2png_batch::{run, FallbackChain, Logger};

/// Parses arguments and runs one batch. Per-file failures never change the exit code.
fn main() {
    let cli = Cli::parse();
    let config = cli.into_config();

    Logger::header(env!("CARGO_PKG_VERSION"));
    let chain = FallbackChain::default_tools();
    Logger::detail(&format!(
        "Scanning {} at {}x{} (converters: {})",
        config.root.display(),
        config.size,
        config.size,
        chain.names().join(", ")
    ));

    run(&config, &chain);
}
