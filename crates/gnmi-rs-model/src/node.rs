//! Collaborator seams: node factories, validated config structs and JSON
//! unmarshalers.

use crate::error::{UnmarshalError, ValidationError};
use gnmi_rs_protocol::{Code, Path, Status};
use serde::de::DeserializeOwned;
use std::any::{Any, type_name};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Decodes raw JSON bytes into a config struct in place.
pub type JsonUnmarshaler =
    Arc<dyn Fn(&[u8], &mut dyn ValidatedConfig) -> Result<(), UnmarshalError> + Send + Sync>;

/// Upcast helpers backing typed field access on `dyn ValidatedConfig`.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// A data-bound config struct honoring a schema.
pub trait ValidatedConfig: AsAny + Send + Sync + fmt::Debug + 'static {
    /// Check the struct against its schema constraints.
    fn validate(&self) -> Result<(), ValidationError>;
}

impl dyn ValidatedConfig {
    /// Borrow the concrete config type.
    pub fn downcast_ref<T: ValidatedConfig>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Mutably borrow the concrete config type.
    pub fn downcast_mut<T: ValidatedConfig>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    /// Take ownership of the concrete config type.
    pub fn downcast<T: ValidatedConfig>(self: Box<Self>) -> Option<Box<T>> {
        self.into_any().downcast::<T>().ok()
    }

    /// Whether the node is a `T`.
    pub fn is<T: ValidatedConfig>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

/// A node materialized by a [`NodeFactory`].
#[derive(Debug)]
pub enum Node {
    /// A container struct supporting validation and typed field access.
    Struct(Box<dyn ValidatedConfig>),
    /// A scalar leaf value.
    Leaf(serde_json::Value),
}

/// Materializes schema nodes for a path.
pub trait NodeFactory: Send + Sync {
    /// Create a new, empty node for `path`. The root path yields the root
    /// config struct.
    fn new_node(&self, path: &Path) -> Result<Node, Status>;
}

impl<F> NodeFactory for F
where
    F: Fn(&Path) -> Result<Node, Status> + Send + Sync,
{
    fn new_node(&self, path: &Path) -> Result<Node, Status> {
        self(path)
    }
}

/// Factory producing `T::default()` at the root path.
pub struct RootFactory<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> RootFactory<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for RootFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RootFactory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootFactory")
            .field("root", &type_name::<T>())
            .finish()
    }
}

impl<T> NodeFactory for RootFactory<T>
where
    T: ValidatedConfig + Default,
{
    fn new_node(&self, path: &Path) -> Result<Node, Status> {
        if !path.is_root() {
            return Err(Status::new(
                Code::Unimplemented,
                format!(
                    "{} only materializes the root node, got {path}",
                    type_name::<T>()
                ),
            ));
        }
        Ok(Node::Struct(Box::new(T::default())))
    }
}

/// Decode `json` into `target`, replacing its contents with a fresh `T`.
///
/// Suitable as a [`JsonUnmarshaler`] for serde-derived config structs:
/// `Arc::new(unmarshal_json::<Device>)`.
pub fn unmarshal_json<T>(
    json: &[u8],
    target: &mut dyn ValidatedConfig,
) -> Result<(), UnmarshalError>
where
    T: ValidatedConfig + DeserializeOwned,
{
    let slot = target
        .downcast_mut::<T>()
        .ok_or(UnmarshalError::TargetMismatch {
            expected: type_name::<T>(),
        })?;
    *slot = serde_json::from_slice(json)?;
    Ok(())
}
