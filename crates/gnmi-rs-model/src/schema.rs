//! Schema tree handle shared with schema-aware collaborators.

use gnmi_rs_protocol::Path;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind of a schema tree entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Container,
    List,
    Leaf,
    LeafList,
}

/// A node of the compiled schema tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaEntry {
    pub name: String,
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Space-separated key leaf names for lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub children: BTreeMap<String, SchemaEntry>,
}

impl SchemaEntry {
    /// Build an empty container entry, typically the schema root.
    pub fn container(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Container,
            description: None,
            key: None,
            children: BTreeMap::new(),
        }
    }

    /// Add a child entry keyed by its name.
    pub fn with_child(mut self, child: SchemaEntry) -> Self {
        self.children.insert(child.name.clone(), child);
        self
    }

    pub fn child(&self, name: &str) -> Option<&SchemaEntry> {
        self.children.get(name)
    }

    /// Containers and lists hold children; leaves do not.
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Container | EntryKind::List)
    }

    /// Resolve a path relative to this entry by element name. List keys do
    /// not select anything at the schema level and are ignored.
    pub fn find(&self, path: &Path) -> Option<&SchemaEntry> {
        path.elem
            .iter()
            .try_fold(self, |entry, elem| entry.child(&elem.name))
    }

    /// Key leaf names of a list entry.
    pub fn key_names(&self) -> Vec<&str> {
        self.key
            .as_deref()
            .map(|key| key.split_whitespace().collect())
            .unwrap_or_default()
    }
}
