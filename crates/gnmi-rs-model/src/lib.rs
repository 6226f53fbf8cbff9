//! Device model adapter for gNMI configuration servers.
//!
//! A [`Model`] bundles the schema modules a target supports with the
//! collaborators that materialize, decode and validate its config tree.

mod catalog;
mod enums;
mod error;
mod model;
mod node;
mod schema;

/// Model catalog configuration.
pub use catalog::ModelCatalog;
/// Enum metadata passed through to config consumers.
pub use enums::{EnumData, EnumDefinition};
/// Public error types.
pub use error::{CatalogError, ModelError, UnmarshalError, ValidationError, Violation};
pub use model::{Model, describe_models};
/// Collaborator traits and helpers.
pub use node::{
    AsAny, JsonUnmarshaler, Node, NodeFactory, RootFactory, ValidatedConfig, unmarshal_json,
};
/// Schema tree handle.
pub use schema::{EntryKind, SchemaEntry};
