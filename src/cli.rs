//! Command-line interface for the makefile generator.

use std::path::PathBuf;

use clap::Parser;
use makegen::Overrides;

#[derive(Parser, Debug)]
#[command(name = "makegen", version)]
#[command(about = "Generate a makefile that cross-compiles reqproc", long_about = None)]
pub struct Cli {
    /// TOML file overriding the built-in target table and names
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Makefile path to write
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Application name used for the binary and archives
    #[arg(long, value_name = "NAME")]
    pub app: Option<String>,

    /// Build output directory
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<String>,

    /// Print the makefile to stdout instead of writing it
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Flags that replace values from the config file.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            output: self.output.clone(),
            app: self.app.clone(),
            out_dir: self.out_dir.clone(),
        }
    }
}
