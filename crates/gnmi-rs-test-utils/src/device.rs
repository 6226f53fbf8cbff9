//! A small openconfig-style device tree used as the root config struct in
//! tests.

use gnmi_rs_model::{
    EntryKind, EnumData, EnumDefinition, Model, RootFactory, SchemaEntry, ValidatedConfig,
    ValidationError, Violation, unmarshal_json,
};
use gnmi_rs_protocol::ModelData;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

const MIN_MTU: u16 = 68;
const MAX_MTU: u16 = 9216;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Device {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<System>,
    /// Interfaces keyed by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub interfaces: BTreeMap<String, Interface>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct System {
    #[serde(default)]
    pub hostname: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Interface {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub mtu: Option<u16>,
    #[serde(default, rename = "type")]
    pub kind: Option<InterfaceType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterfaceType {
    EthernetCsmacd = 1,
    SoftwareLoopback = 2,
}

impl ValidatedConfig for Device {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();
        if let Some(hostname) = self.system.as_ref().and_then(|s| s.hostname.as_deref())
            && hostname.is_empty()
        {
            violations.push(Violation {
                path: "/system/config/hostname".to_string(),
                message: "hostname must not be empty".to_string(),
            });
        }
        for (key, interface) in &self.interfaces {
            let prefix = format!("/interfaces/interface[name={key}]");
            match interface.name.as_deref() {
                Some(name) if name == key => {}
                Some(name) => violations.push(Violation {
                    path: format!("{prefix}/name"),
                    message: format!("name {name:?} does not match list key {key:?}"),
                }),
                None => violations.push(Violation {
                    path: format!("{prefix}/name"),
                    message: "missing list key".to_string(),
                }),
            }
            if let Some(mtu) = interface.mtu
                && !(MIN_MTU..=MAX_MTU).contains(&mtu)
            {
                violations.push(Violation {
                    path: format!("{prefix}/config/mtu"),
                    message: format!("mtu {mtu} outside {MIN_MTU}..={MAX_MTU}"),
                });
            }
        }
        ValidationError::check(violations)
    }
}

pub fn sample_model_data() -> Vec<ModelData> {
    vec![
        ModelData::new("openconfig-interfaces", "2.1.0")
            .with_organization("OpenConfig working group"),
        ModelData::new("openconfig-acl", "1.0.0").with_organization("OpenConfig working group"),
    ]
}

pub fn sample_schema() -> SchemaEntry {
    let leaf = |name: &str| SchemaEntry {
        kind: EntryKind::Leaf,
        ..SchemaEntry::container(name)
    };
    let interface = SchemaEntry {
        kind: EntryKind::List,
        key: Some("name".to_string()),
        ..SchemaEntry::container("interface")
    }
    .with_child(leaf("name"))
    .with_child(
        SchemaEntry::container("config")
            .with_child(leaf("mtu"))
            .with_child(leaf("type")),
    );
    SchemaEntry::container("device")
        .with_child(
            SchemaEntry::container("system")
                .with_child(SchemaEntry::container("config").with_child(leaf("hostname"))),
        )
        .with_child(SchemaEntry::container("interfaces").with_child(interface))
}

pub fn sample_enum_data() -> EnumData {
    let module = "iana-if-type";
    let values = HashMap::from([
        (
            InterfaceType::EthernetCsmacd as i64,
            EnumDefinition::new("ethernetCsmacd", module),
        ),
        (
            InterfaceType::SoftwareLoopback as i64,
            EnumDefinition::new("softwareLoopback", module),
        ),
    ]);
    HashMap::from([("E_IETFInterfaces_InterfaceType".to_string(), values)])
}

/// A model rooted at [`Device`] with serde decoding.
pub fn sample_model() -> Model {
    Model::new(
        sample_model_data(),
        Arc::new(RootFactory::<Device>::new()),
        Arc::new(sample_schema()),
        Arc::new(unmarshal_json::<Device>),
        sample_enum_data(),
    )
}
