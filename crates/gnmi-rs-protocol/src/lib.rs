//! Wire-level gNMI value types shared by the model adapter and servers.

mod path;
mod status;

pub use path::{Path, PathElem};
pub use status::{Code, Status};

use serde::{Deserialize, Serialize};

/// Describes a schema module a target supports, as advertised in
/// `CapabilityResponse.supported_models`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelData {
    /// Name of the model, e.g. `openconfig-interfaces`.
    pub name: String,
    /// Organization publishing the model.
    #[serde(default)]
    pub organization: String,
    /// Semantic version of the model.
    pub version: String,
}

impl ModelData {
    /// Build a descriptor without an organization.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            organization: String::new(),
            version: version.into(),
        }
    }

    /// Attach the publishing organization.
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = organization.into();
        self
    }
}
