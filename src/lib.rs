//! Makefile generator for cross-compiling reqproc.
//!
//! Expands a table of platforms and architectures into a makefile with three
//! rules: `main` builds and zips every target, `local` does the same for a
//! fixed pair of developer targets, and `clean` recreates the output
//! directory.

pub mod config;
pub mod error;
pub mod expand;
pub mod makefile;
pub mod target;
pub mod writer;

pub use crate::config::{GeneratorConfig, Overrides};
pub use crate::error::{Error, Result};
pub use crate::makefile::{Makefile, Rule};
pub use crate::target::{Target, TargetTable};

/// Renders the makefile text for `config`.
pub fn render(config: &GeneratorConfig) -> String {
    expand::generate_makefile(config).to_string()
}

/// Validates `config` and writes the makefile text to `out` instead of a file.
pub fn write_to(config: &GeneratorConfig, out: &mut impl std::io::Write) -> Result<()> {
    config.validate()?;
    out.write_all(render(config).as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Generates the makefile and writes it to `config.output`, replacing any
/// existing file.
pub fn run(config: &GeneratorConfig) -> Result<()> {
    config.validate()?;
    let text = render(config);
    writer::write_atomic(&config.output, &text)?;
    tracing::info!(
        path = %config.output.display(),
        targets = config.targets.targets().count(),
        "generated makefile"
    );
    Ok(())
}
