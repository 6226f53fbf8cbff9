//! gNMI path addressing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single element of a gNMI path, with optional list keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathElem {
    /// Schema node name.
    pub name: String,
    /// List keys selecting an entry, ordered by key name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub key: BTreeMap<String, String>,
}

impl PathElem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: BTreeMap::new(),
        }
    }

    /// Add a list key to the element.
    pub fn with_key(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.key.insert(name.into(), value.into());
        self
    }
}

/// Path to a node in a target's data tree. The empty path is the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub origin: String,
    #[serde(default)]
    pub elem: Vec<PathElem>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub target: String,
}

impl Path {
    /// The root path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from element names without keys.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elem: names.into_iter().map(PathElem::new).collect(),
            ..Self::default()
        }
    }

    /// Append an element.
    pub fn push(mut self, elem: PathElem) -> Self {
        self.elem.push(elem);
        self
    }

    pub fn is_root(&self) -> bool {
        self.elem.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.origin.is_empty() {
            write!(f, "{}:", self.origin)?;
        }
        if self.elem.is_empty() {
            return f.write_str("/");
        }
        for elem in &self.elem {
            write!(f, "/{}", elem.name)?;
            for (name, value) in &elem.key {
                write!(f, "[{name}={value}]")?;
            }
        }
        Ok(())
    }
}
