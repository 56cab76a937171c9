//! Error handling for the makefile generator.

use derive_more::{Display, Error, From};

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating or writing a makefile.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// I/O errors when reading the config or writing the makefile.
    #[display("I/O error: {_0}")]
    Io(#[error(source)] std::io::Error),

    /// The finished temp file could not be moved over the destination.
    #[from(ignore)]
    #[display("failed to replace {}: {source}", path.display())]
    Persist {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    /// Malformed TOML config document.
    #[display("Config error: {_0}")]
    Config(toml::de::Error),

    /// A platform, architecture, or path component that would corrupt
    /// the generated rule text.
    #[from(ignore)]
    #[display("Invalid {kind} name: {name:?}")]
    InvalidName {
        kind: NameKind,
        name: String,
    },
}

/// Which configured value failed validation.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    #[display("application")]
    Application,
    #[display("output directory")]
    OutputDirectory,
    #[display("platform")]
    Platform,
    #[display("architecture")]
    Architecture,
}

impl Error {
    pub(crate) fn invalid_name(kind: NameKind, name: impl Into<String>) -> Self {
        Error::InvalidName {
            kind,
            name: name.into(),
        }
    }
}
