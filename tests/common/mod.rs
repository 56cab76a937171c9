//! Common test utilities for generator integration tests.

use std::path::Path;

use makegen::GeneratorConfig;
use tempfile::TempDir;

/// Config that writes its makefile into a fresh temp directory.
///
/// The directory is removed when the returned guard is dropped.
#[allow(dead_code)]
pub fn config_in_tempdir() -> (TempDir, GeneratorConfig) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = GeneratorConfig {
        output: dir.path().join("makefile"),
        ..GeneratorConfig::default()
    };
    (dir, config)
}

pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("Failed to read generated makefile")
}

/// Recipe lines of the rule named `name`, without their leading tab.
pub fn recipe<'a>(makefile: &'a str, name: &str) -> Vec<&'a str> {
    let header = format!("{name}:");
    makefile
        .lines()
        .skip_while(|line| !line.starts_with(&header))
        .skip(1)
        .take_while(|line| line.starts_with('\t'))
        .map(|line| &line[1..])
        .collect()
}
