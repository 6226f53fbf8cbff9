//! Enumerated type metadata for generated config structs.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identity behind one value of an enumerated type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDefinition {
    /// YANG identity or enum name, e.g. `ETHERNET_CSMACD`.
    pub name: String,
    /// Module defining the identity, used to qualify it in JSON output.
    #[serde(default)]
    pub defining_module: String,
}

impl EnumDefinition {
    pub fn new(name: impl Into<String>, defining_module: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            defining_module: defining_module.into(),
        }
    }
}

/// Enum type name to integer value to definition.
pub type EnumData = HashMap<String, HashMap<i64, EnumDefinition>>;
