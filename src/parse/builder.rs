use crate::config::{Config, Group};
use crate::error::{ConfigError, Result};
use crate::parse::line::{classify, Line};
use crate::parse::value::coerce;

use indexmap::IndexMap;

/// Accumulates classified lines into a [`Config`]
///
/// Lines are fed strictly in file order. The builder keeps the current-group
/// cursor and enforces the grammar invariants: no duplicate group names, no
/// setting before the first group header. The first violation aborts the
/// whole parse.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    groups: IndexMap<String, Group>,
    current: Option<String>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw line, with its 1-based line number
    pub fn feed(&mut self, number: usize, text: &str) -> Result<()> {
        match classify(text) {
            Line::Blank => Ok(()),
            Line::GroupHeader(name) => {
                if self.groups.contains_key(&name) {
                    return Err(ConfigError::DuplicateGroup { name, line: number });
                }
                tracing::debug!(group = %name, line = number, "entering group");
                self.current = Some(name.clone());
                self.groups.insert(name, Group::default());
                Ok(())
            }
            Line::Setting { key, raw } => {
                let current = self
                    .current
                    .as_ref()
                    .and_then(|name| self.groups.get_mut(name));
                match current {
                    // Duplicate keys within a group silently overwrite.
                    Some(group) => {
                        group.insert(key, coerce(&raw));
                        Ok(())
                    }
                    None => Err(ConfigError::MissingGroup { line: number }),
                }
            }
            Line::Unrecognized => Err(ConfigError::InvalidLine {
                line: number,
                text: text.trim().to_string(),
            }),
        }
    }

    /// Apply one `group.key=value` override directive
    ///
    /// `index` is the 1-based position in the override sequence, the
    /// directive's analog of a line number. The value grammar is the same as
    /// for file settings. The target group is created when absent.
    pub fn apply_override(&mut self, index: usize, directive: &str) -> Result<()> {
        let malformed = || ConfigError::InvalidOverride {
            index,
            directive: directive.to_string(),
        };

        let (target, raw) = directive.split_once('=').ok_or_else(malformed)?;
        let (group, key) = target.split_once('.').ok_or_else(malformed)?;
        let (group, key) = (group.trim(), key.trim());
        if group.is_empty() || key.is_empty() {
            return Err(malformed());
        }

        tracing::debug!(group, key, index, "applying override");
        self.groups
            .entry(group.to_string())
            .or_default()
            .insert(key.to_string(), coerce(raw));
        Ok(())
    }

    /// Finish the build, transferring ownership of the groups to the result
    pub fn finish(self) -> Config {
        Config::new(self.groups)
    }
}
