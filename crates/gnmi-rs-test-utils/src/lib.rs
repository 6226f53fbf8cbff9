//! Test helpers shared across gnmi-rs crates.

pub mod device;
pub mod factory;
pub mod unmarshal;

pub use device::{
    Device, Interface, InterfaceType, System, sample_enum_data, sample_model, sample_model_data,
    sample_schema,
};
pub use factory::{FailingFactory, ForeignConfig, LeafFactory};
pub use unmarshal::RecordingUnmarshaler;
