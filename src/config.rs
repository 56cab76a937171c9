//! Generator configuration.
//!
//! Defaults reproduce the reqproc release matrix. A TOML document can
//! override any of them:
//!
//! ```toml
//! app = "reqproc"
//! out-dir = "build"
//! output = "makefile"
//!
//! [[targets]]
//! platform = "linux"
//! arches = ["386", "amd64", "arm64"]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, NameKind, Result};
use crate::target::{TargetTable, check_name};

pub const DEFAULT_APP: &str = "reqproc";
pub const DEFAULT_OUT_DIR: &str = "build";
pub const DEFAULT_OUTPUT: &str = "makefile";

/// Everything needed to generate and write one makefile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Binary name, also the archive name prefix.
    pub app: String,
    /// Directory the recipes build into; recreated by `clean`.
    pub out_dir: String,
    /// Where the makefile is written.
    pub output: PathBuf,
    /// Full release matrix, expanded into `main`.
    pub targets: TargetTable,
    /// Reduced matrix, expanded into `local`.
    pub local: TargetTable,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            app: DEFAULT_APP.to_string(),
            out_dir: DEFAULT_OUT_DIR.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            targets: TargetTable::release(),
            local: TargetTable::local(),
        }
    }
}

/// Values given on the command line, applied on top of the loaded config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub output: Option<PathBuf>,
    pub app: Option<String>,
    pub out_dir: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
struct ConfigFile {
    app: Option<String>,
    out_dir: Option<String>,
    output: Option<PathBuf>,
    targets: Option<Vec<TargetEntry>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TargetEntry {
    platform: String,
    arches: Vec<String>,
}

impl GeneratorConfig {
    /// Load config from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents)?;
        let mut config = Self::default();
        if let Some(app) = file.app {
            config.app = app;
        }
        if let Some(out_dir) = file.out_dir {
            config.out_dir = out_dir;
        }
        if let Some(output) = file.output {
            config.output = output;
        }
        if let Some(targets) = file.targets {
            config.targets = targets
                .into_iter()
                .map(|entry| (entry.platform, entry.arches))
                .collect();
        }
        config.validate()?;
        Ok(config)
    }

    /// Replaces any field set in `overrides`, leaving the rest as loaded.
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if let Some(app) = overrides.app {
            self.app = app;
        }
        if let Some(out_dir) = overrides.out_dir {
            self.out_dir = out_dir;
        }
    }

    /// Checks every name that ends up in the generated rules.
    pub fn validate(&self) -> Result<()> {
        check_name(NameKind::Application, &self.app)?;
        // The output directory may be nested, so each component is checked;
        // an absolute path or `..` anywhere is rejected along the way.
        if self.out_dir.is_empty() {
            return Err(Error::invalid_name(NameKind::OutputDirectory, ""));
        }
        for component in self.out_dir.split('/') {
            check_name(NameKind::OutputDirectory, component)
                .map_err(|_| Error::invalid_name(NameKind::OutputDirectory, &self.out_dir))?;
        }
        self.targets.validate()?;
        self.local.validate()
    }
}
