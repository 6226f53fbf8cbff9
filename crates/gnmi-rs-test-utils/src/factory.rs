use gnmi_rs_model::{Node, NodeFactory, ValidatedConfig, ValidationError};
use gnmi_rs_protocol::{Code, Path, Status};

/// Factory that always fails with a fixed status.
#[derive(Debug, Clone)]
pub struct FailingFactory {
    status: Status,
}

impl FailingFactory {
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            status: Status::new(code, message),
        }
    }
}

impl NodeFactory for FailingFactory {
    fn new_node(&self, _path: &Path) -> Result<Node, Status> {
        Err(self.status.clone())
    }
}

/// Factory that materializes a scalar leaf instead of a config struct.
#[derive(Debug, Clone, Default)]
pub struct LeafFactory;

impl NodeFactory for LeafFactory {
    fn new_node(&self, _path: &Path) -> Result<Node, Status> {
        Ok(Node::Leaf(serde_json::Value::Null))
    }
}

/// Config struct of a different model, always valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForeignConfig;

impl ValidatedConfig for ForeignConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
