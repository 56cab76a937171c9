//! In-memory makefile model and its text rendering.
//!
//! A rule renders as
//!
//! ```text
//! <name>: <dependency> ...
//! \t<command>
//! ```
//!
//! Recipe lines must start with a tab; `make` rejects space-indented
//! recipes. Rules are separated by a single blank line.

use std::fmt;

/// A named target with its prerequisites and recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub name: String,
    pub deps: Vec<String>,
    pub recipe: Vec<String>,
}

impl Rule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            deps: Vec::new(),
            recipe: Vec::new(),
        }
    }

    pub fn dep(mut self, dep: impl Into<String>) -> Self {
        self.deps.push(dep.into());
        self
    }

    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.recipe.push(command.into());
        self
    }

    pub fn commands<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recipe.extend(commands.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.name)?;
        for dep in &self.deps {
            write!(f, " {dep}")?;
        }
        writeln!(f)?;
        for command in &self.recipe {
            writeln!(f, "\t{command}")?;
        }
        Ok(())
    }
}

/// An ordered list of rules; the first one is the default goal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Makefile {
    rules: Vec<Rule>,
}

impl Makefile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.name == name)
    }
}

impl fmt::Display for Makefile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{rule}")?;
        }
        Ok(())
    }
}
