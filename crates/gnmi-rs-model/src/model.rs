//! The device model bundle used by configuration servers.

use crate::enums::{EnumData, EnumDefinition};
use crate::error::ModelError;
use crate::node::{JsonUnmarshaler, Node, NodeFactory, ValidatedConfig};
use crate::schema::SchemaEntry;
use gnmi_rs_protocol::{ModelData, Path};
use log::debug;
use std::fmt;
use std::sync::Arc;

/// Model data and config struct collaborators for the device to configure.
///
/// Immutable once built; clones share the underlying collaborators.
#[derive(Clone)]
pub struct Model {
    model_data: Vec<ModelData>,
    factory: Arc<dyn NodeFactory>,
    schema_root: Arc<SchemaEntry>,
    unmarshaler: JsonUnmarshaler,
    enum_data: Arc<EnumData>,
}

impl Model {
    /// Bundle the model collaborators. Inputs are trusted as given.
    pub fn new(
        model_data: Vec<ModelData>,
        factory: Arc<dyn NodeFactory>,
        schema_root: Arc<SchemaEntry>,
        unmarshaler: JsonUnmarshaler,
        enum_data: EnumData,
    ) -> Self {
        debug!(
            "device model created (models={}, schema_root={}, enum_types={})",
            model_data.len(),
            schema_root.name,
            enum_data.len()
        );
        Self {
            model_data,
            factory,
            schema_root,
            unmarshaler,
            enum_data: Arc::new(enum_data),
        }
    }

    /// Create a config struct of this model from `json_config`. `None` yields
    /// an empty struct without decoding or validation.
    pub fn new_config_struct(
        &self,
        json_config: Option<&[u8]>,
    ) -> Result<Box<dyn ValidatedConfig>, ModelError> {
        let root = self
            .factory
            .new_node(&Path::root())
            .map_err(ModelError::NodeCreationFailed)?;
        let Node::Struct(mut root) = root else {
            return Err(ModelError::UnexpectedNodeType);
        };

        if let Some(json) = json_config {
            (self.unmarshaler)(json, root.as_mut()).map_err(ModelError::DecodeFailed)?;
            root.validate().map_err(ModelError::ValidationFailed)?;
        }
        Ok(root)
    }

    /// Like [`Model::new_config_struct`], returning the concrete root type.
    pub fn new_typed_config<T: ValidatedConfig>(
        &self,
        json_config: Option<&[u8]>,
    ) -> Result<Box<T>, ModelError> {
        self.new_config_struct(json_config)?
            .downcast::<T>()
            .ok_or(ModelError::UnexpectedNodeType)
    }

    /// Supported models as sorted `"<name> <version>"` strings.
    pub fn supported_models(&self) -> Vec<String> {
        describe_models(&self.model_data)
    }

    pub fn model_data(&self) -> &[ModelData] {
        &self.model_data
    }

    pub fn schema_tree(&self) -> &SchemaEntry {
        &self.schema_root
    }

    pub fn enum_data(&self) -> &EnumData {
        &self.enum_data
    }

    /// Resolve an enumerated value to its definition.
    pub fn enum_definition(&self, type_name: &str, value: i64) -> Option<&EnumDefinition> {
        self.enum_data.get(type_name)?.get(&value)
    }

    /// Resolve an enumerated value to its identity name.
    pub fn enum_name(&self, type_name: &str, value: i64) -> Option<&str> {
        self.enum_definition(type_name, value)
            .map(|definition| definition.name.as_str())
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("model_data", &self.model_data)
            .field("schema_root", &self.schema_root.name)
            .field("enum_types", &self.enum_data.len())
            .finish()
    }
}

/// Format descriptors as `"<name> <version>"` and sort them ascending.
pub fn describe_models(model_data: &[ModelData]) -> Vec<String> {
    let mut models: Vec<String> = model_data
        .iter()
        .map(|model| format!("{} {}", model.name, model.version))
        .collect();
    models.sort();
    models
}
