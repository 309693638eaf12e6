use indexmap::IndexMap;
use serde::Serialize;

use crate::parse::Value;

/// One named group of settings
///
/// Keys keep their file order. Lookup of an unknown key returns `None`
/// rather than failing, so consumers can probe for optional settings
/// without a guard clause.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Group {
    settings: IndexMap<String, Value>,
}

impl Group {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Settings in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.settings.iter()
    }

    pub(crate) fn insert(&mut self, key: String, value: Value) {
        self.settings.insert(key, value);
    }
}

/// The parsed configuration: group name to [`Group`], in file order
///
/// Built once by the parser, read-only afterwards. Like [`Group`], lookups
/// never fail; absence is `None`, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Config {
    groups: IndexMap<String, Group>,
}

impl Config {
    pub(crate) fn new(groups: IndexMap<String, Group>) -> Self {
        Self { groups }
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    /// Probe a group and key in one step
    ///
    /// Returns `None` when either the group or the key is absent.
    pub fn get(&self, group: &str, key: &str) -> Option<&Value> {
        self.groups.get(group).and_then(|g| g.get(key))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups in file order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Group)> {
        self.groups.iter()
    }
}
