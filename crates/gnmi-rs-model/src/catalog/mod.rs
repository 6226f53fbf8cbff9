//! Model catalog: the JSON5 file listing the schema modules a server
//! advertises in its capabilities.

mod schema;


use crate::CatalogError;
use crate::model::describe_models;
use directories::UserDirs;
use gnmi_rs_protocol::ModelData;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Default catalog filename.
const DEFAULT_CATALOG_FILE: &str = "models.json5";
/// Default catalog directory under the home directory.
const DEFAULT_CATALOG_DIR: &str = ".gnmi";

/// Supported models declared by a catalog file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelCatalog {
    #[serde(default, rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default)]
    pub models: Vec<ModelData>,
}

impl ModelCatalog {
    /// Default catalog location, `~/.gnmi/models.json5`.
    pub fn default_path() -> Option<PathBuf> {
        UserDirs::new().map(|dirs| {
            dirs.home_dir()
                .join(DEFAULT_CATALOG_DIR)
                .join(DEFAULT_CATALOG_FILE)
        })
    }

    /// Load the catalog from the default location.
    pub fn load_default() -> Result<Self, CatalogError> {
        let path = Self::default_path()
            .ok_or_else(|| CatalogError::Invalid("home directory not found".to_string()))?;
        Self::load_from_path(path)
    }

    /// Load a catalog from a JSON5 file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        info!("loading model catalog from path: {}", path.display());
        let contents = fs::read_to_string(path)?;
        let value: Value = json5::from_str(&contents)?;
        catalog_from_value(value, &format!("catalog({})", path.display()))
    }

    /// Load a catalog from JSON5 contents.
    pub fn load_from_str(contents: &str) -> Result<Self, CatalogError> {
        debug!("loading model catalog from raw contents (len={})", contents.len());
        let value: Value = json5::from_str(contents)?;
        catalog_from_value(value, "catalog")
    }

    /// Validate catalog invariants that cannot be expressed in serde.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for (idx, model) in self.models.iter().enumerate() {
            if model.name.trim().is_empty() {
                return Err(CatalogError::Invalid(format!(
                    "models[{idx}] has an empty name"
                )));
            }
            if !seen.insert((model.name.as_str(), model.version.as_str())) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate model {} {}",
                    model.name, model.version
                )));
            }
        }
        Ok(())
    }

    /// Supported models as sorted `"<name> <version>"` strings.
    pub fn supported_models(&self) -> Vec<String> {
        describe_models(&self.models)
    }

    /// Hand the descriptors over to a [`crate::Model`].
    pub fn into_model_data(self) -> Vec<ModelData> {
        self.models
    }
}

fn catalog_from_value(value: Value, label: &str) -> Result<ModelCatalog, CatalogError> {
    schema::validate_catalog_schema(&value, label)?;
    let catalog: ModelCatalog = serde_json::from_value(value)?;
    catalog.validate()?;
    debug!("model catalog loaded (models={})", catalog.models.len());
    Ok(catalog)
}
