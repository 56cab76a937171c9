//! Cross-compilation targets and the ordered platform table.
//!
//! A [`TargetTable`] maps a platform (a `GOOS` value such as `linux` or
//! `wasip1`) to the architectures (`GOARCH` values) built for it. Iteration
//! follows insertion order so that generated output is deterministic.

use std::fmt;

use crate::error::{Error, NameKind, Result};

/// One `(platform, architecture)` build pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target<'a> {
    pub platform: &'a str,
    pub arch: &'a str,
}

impl fmt::Display for Target<'_> {
    /// Formats as `<platform>_<arch>`, the archive name suffix.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.platform, self.arch)
    }
}

/// Ordered mapping from platform name to architecture names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetTable {
    entries: Vec<(String, Vec<String>)>,
}

impl TargetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table the generator builds in a full release.
    pub fn release() -> Self {
        const WINDOWS: &[&str] = &["amd64", "arm64"];
        const UNIX: &[&str] = &["386", "amd64", "arm64"];

        let mut table = Self::new();
        table.insert("wasip1", ["wasm"]);
        table.insert("darwin", ["arm64"]);
        table.insert("windows", WINDOWS.iter().copied());
        for platform in ["linux", "freebsd", "netbsd", "openbsd"] {
            table.insert(platform, UNIX.iter().copied());
        }
        table
    }

    /// Reduced table for quick builds on a developer machine.
    pub fn local() -> Self {
        let mut table = Self::new();
        table.insert("wasip1", ["wasm"]);
        table.insert("darwin", ["arm64"]);
        table
    }

    /// Adds architectures for a platform.
    ///
    /// A platform seen before keeps its original position; new architectures
    /// are appended to it and repeats are dropped.
    pub fn insert<I, S>(&mut self, platform: impl Into<String>, arches: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let platform = platform.into();
        let idx = match self.entries.iter().position(|(p, _)| *p == platform) {
            Some(idx) => idx,
            None => {
                self.entries.push((platform, Vec::new()));
                self.entries.len() - 1
            }
        };
        let list = &mut self.entries[idx].1;
        for arch in arches {
            let arch = arch.into();
            if !list.contains(&arch) {
                list.push(arch);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of platforms in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn platforms(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(platform, arches)| (platform.as_str(), arches.as_slice()))
    }

    /// Every build pair, platforms first, then architectures, in table order.
    pub fn targets(&self) -> impl Iterator<Item = Target<'_>> {
        self.platforms().flat_map(|(platform, arches)| {
            arches.iter().map(move |arch| Target {
                platform,
                arch: arch.as_str(),
            })
        })
    }

    /// Rejects names that would break the shell command or rule grammar.
    pub fn validate(&self) -> Result<()> {
        for (platform, arches) in self.platforms() {
            check_name(NameKind::Platform, platform)?;
            for arch in arches {
                check_name(NameKind::Architecture, arch)?;
            }
        }
        Ok(())
    }
}

impl<P, A, S> FromIterator<(P, A)> for TargetTable
where
    P: Into<String>,
    A: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (P, A)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (platform, arches) in iter {
            table.insert(platform, arches);
        }
        table
    }
}

/// A name is usable if it is made only of ASCII letters, digits, `.`, `_`
/// and `-`, does not start with `-`, and is not `.` or `..`.
///
/// Names are pasted unquoted into recipe lines, so anything else could be
/// read by the shell or by `make`.
pub(crate) fn check_name(kind: NameKind, name: &str) -> Result<()> {
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-');
    if name.is_empty()
        || !name.chars().all(allowed)
        || name.starts_with('-')
        || name == "."
        || name == ".."
    {
        return Err(Error::invalid_name(kind, name));
    }
    Ok(())
}
