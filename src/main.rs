//! makegen entry point.

mod cli;

use clap::Parser;
use cli::Cli;
use makegen::{GeneratorConfig, Result};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = generate(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--stdout` output stays a clean makefile.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn generate(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    config.apply(cli.overrides());

    if cli.stdout {
        return makegen::write_to(&config, &mut std::io::stdout().lock());
    }

    makegen::run(&config)?;
    println!("Wrote {}", config.output.display());
    Ok(())
}
