//! Config struct instantiation and supported-model listing.

use gnmi_rs_model::{Model, ModelError, Node, NodeFactory, RootFactory, UnmarshalError};
use gnmi_rs_protocol::{Code, ModelData, Path, Status};
use gnmi_rs_test_utils::{
    Device, FailingFactory, ForeignConfig, InterfaceType, LeafFactory, RecordingUnmarshaler,
    sample_enum_data, sample_model, sample_model_data, sample_schema,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::thread;

const VALID_CONFIG: &str = r#"{
    "system": { "hostname": "r1" },
    "interfaces": {
        "eth0": { "name": "eth0", "mtu": 1500, "type": "ETHERNET_CSMACD", "enabled": true },
        "lo0": { "name": "lo0", "type": "SOFTWARE_LOOPBACK" }
    }
}"#;

fn model_with(factory: Arc<dyn NodeFactory>, recorder: &RecordingUnmarshaler) -> Model {
    Model::new(
        sample_model_data(),
        factory,
        Arc::new(sample_schema()),
        recorder.unmarshaler(),
        sample_enum_data(),
    )
}

#[test]
fn supported_models_are_sorted() {
    let model = sample_model();
    assert_eq!(
        model.supported_models(),
        vec![
            "openconfig-acl 1.0.0".to_string(),
            "openconfig-interfaces 2.1.0".to_string(),
        ]
    );
}

#[test]
fn supported_models_ignore_input_order() {
    let mut reversed = sample_model_data();
    reversed.reverse();
    let model = Model::new(
        reversed,
        Arc::new(RootFactory::<Device>::new()),
        Arc::new(sample_schema()),
        RecordingUnmarshaler::new().unmarshaler(),
        sample_enum_data(),
    );
    assert_eq!(model.supported_models(), sample_model().supported_models());
    assert_eq!(model.supported_models(), model.supported_models());
}

#[test]
fn supported_models_empty_without_descriptors() {
    let model = Model::new(
        Vec::new(),
        Arc::new(RootFactory::<Device>::new()),
        Arc::new(sample_schema()),
        RecordingUnmarshaler::new().unmarshaler(),
        sample_enum_data(),
    );
    assert!(model.supported_models().is_empty());
}

#[test]
fn absent_config_yields_empty_struct_without_decoding() {
    let recorder = RecordingUnmarshaler::new();
    let model = model_with(Arc::new(RootFactory::<Device>::new()), &recorder);

    let config = model.new_config_struct(None).expect("empty config");
    assert_eq!(config.downcast_ref::<Device>(), Some(&Device::default()));
    assert_eq!(recorder.calls(), 0);
}

#[test]
fn absent_config_skips_validation() {
    let invalid_default = |_: &Path| -> Result<Node, Status> {
        let mut device = Device::default();
        device.interfaces.insert("eth0".to_string(), Default::default());
        Ok(Node::Struct(Box::new(device)))
    };
    let model = model_with(Arc::new(invalid_default), &RecordingUnmarshaler::new());
    let config = model.new_typed_config::<Device>(None).expect("unvalidated");
    assert_eq!(config.interfaces.len(), 1);
}

#[test]
fn valid_config_is_decoded_and_validated() {
    let recorder = RecordingUnmarshaler::new();
    let model = model_with(Arc::new(RootFactory::<Device>::new()), &recorder);

    let device = model
        .new_typed_config::<Device>(Some(VALID_CONFIG.as_bytes()))
        .expect("config");
    assert_eq!(
        device.system.as_ref().and_then(|s| s.hostname.as_deref()),
        Some("r1")
    );
    assert_eq!(device.interfaces["eth0"].mtu, Some(1500));
    assert_eq!(
        device.interfaces["lo0"].kind,
        Some(InterfaceType::SoftwareLoopback)
    );
    assert_eq!(recorder.payloads(), vec![VALID_CONFIG.as_bytes().to_vec()]);
}

#[test]
fn malformed_json_is_decode_failure() {
    let model = sample_model();
    let err = model
        .new_config_struct(Some(br#"{"interfaces": "#.as_slice()))
        .unwrap_err();
    assert!(matches!(
        err,
        ModelError::DecodeFailed(UnmarshalError::Json(_))
    ));
}

#[test]
fn unknown_fields_are_decode_failures() {
    let model = sample_model();
    let err = model
        .new_config_struct(Some(br#"{"routing": {}}"#.as_slice()))
        .unwrap_err();
    assert!(matches!(err, ModelError::DecodeFailed(_)));
}

#[test]
fn empty_payload_is_still_decoded() {
    let recorder = RecordingUnmarshaler::new();
    let model = model_with(Arc::new(RootFactory::<Device>::new()), &recorder);
    let err = model.new_config_struct(Some(b"".as_slice())).unwrap_err();
    assert!(matches!(err, ModelError::DecodeFailed(_)));
    assert_eq!(recorder.calls(), 1);
}

#[test]
fn schema_violations_are_validation_failures() {
    let model = sample_model();
    let json = br#"{ "interfaces": { "eth0": { "name": "eth1", "mtu": 20 } } }"#;
    let validation = match model.new_config_struct(Some(json.as_slice())) {
        Err(ModelError::ValidationFailed(validation)) => validation,
        other => panic!("expected validation failure, got {other:?}"),
    };
    let paths: Vec<&str> = validation
        .violations()
        .iter()
        .map(|violation| violation.path.as_str())
        .collect();
    assert_eq!(
        paths,
        vec![
            "/interfaces/interface[name=eth0]/name",
            "/interfaces/interface[name=eth0]/config/mtu",
        ]
    );
}

#[test]
fn factory_failure_surfaces_status() {
    let recorder = RecordingUnmarshaler::new();
    let model = model_with(
        Arc::new(FailingFactory::new(Code::NotFound, "no root type registered")),
        &recorder,
    );
    let err = model
        .new_config_struct(Some(VALID_CONFIG.as_bytes()))
        .unwrap_err();
    match &err {
        ModelError::NodeCreationFailed(status) => {
            assert_eq!(status.code(), Code::NotFound);
            assert_eq!(status.message, "no root type registered");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().starts_with("cannot create root node"));
    assert_eq!(recorder.calls(), 0);
}

#[test]
fn leaf_root_is_unexpected_node_type() {
    let recorder = RecordingUnmarshaler::new();
    let model = model_with(Arc::new(LeafFactory), &recorder);
    let err = model
        .new_config_struct(Some(VALID_CONFIG.as_bytes()))
        .unwrap_err();
    assert!(matches!(err, ModelError::UnexpectedNodeType));
    assert_eq!(recorder.calls(), 0);
}

#[test]
fn typed_config_rejects_foreign_root() {
    let model = model_with(
        Arc::new(RootFactory::<ForeignConfig>::new()),
        &RecordingUnmarshaler::new(),
    );
    assert!(model.new_config_struct(None).is_ok());
    let err = model.new_typed_config::<Device>(None).unwrap_err();
    assert!(matches!(err, ModelError::UnexpectedNodeType));
}

#[test]
fn decoder_target_mismatch_is_decode_failure() {
    let model = model_with(
        Arc::new(RootFactory::<ForeignConfig>::new()),
        &RecordingUnmarshaler::new(),
    );
    let err = model.new_config_struct(Some(b"{}".as_slice())).unwrap_err();
    assert!(matches!(
        err,
        ModelError::DecodeFailed(UnmarshalError::TargetMismatch { .. })
    ));
}

#[test]
fn each_call_returns_a_fresh_struct() {
    let model = sample_model();
    let mut first = model
        .new_typed_config::<Device>(Some(VALID_CONFIG.as_bytes()))
        .expect("first");
    first.interfaces.clear();
    let second = model
        .new_typed_config::<Device>(Some(VALID_CONFIG.as_bytes()))
        .expect("second");
    assert_eq!(second.interfaces.len(), 2);
}

#[test]
fn enum_metadata_resolves_identities() {
    let model = sample_model();
    assert_eq!(
        model.enum_name("E_IETFInterfaces_InterfaceType", InterfaceType::EthernetCsmacd as i64),
        Some("ethernetCsmacd")
    );
    assert_eq!(
        model
            .enum_definition("E_IETFInterfaces_InterfaceType", 2)
            .map(|definition| definition.defining_module.as_str()),
        Some("iana-if-type")
    );
    assert_eq!(model.enum_name("E_IETFInterfaces_InterfaceType", 99), None);
    assert_eq!(model.enum_name("E_Unknown", 1), None);
}

#[test]
fn accessors_expose_bundle() {
    let model = sample_model();
    assert_eq!(model.model_data(), sample_model_data().as_slice());
    assert_eq!(model.schema_tree(), &sample_schema());
    assert_eq!(model.enum_data().len(), 1);
    let schema_path = Path::from_names(["interfaces", "interface", "config", "mtu"]);
    assert!(model.schema_tree().find(&schema_path).is_some());
}

#[test]
fn model_is_shared_across_threads() {
    let model = sample_model();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let model = model.clone();
            thread::spawn(move || {
                let device = model
                    .new_typed_config::<Device>(Some(VALID_CONFIG.as_bytes()))
                    .expect("config");
                (device.interfaces.len(), model.supported_models())
            })
        })
        .collect();
    for handle in handles {
        let (interfaces, models) = handle.join().expect("join");
        assert_eq!(interfaces, 2);
        assert_eq!(models, sample_model().supported_models());
    }
}

#[test]
fn descriptors_accept_organization() {
    let model = Model::new(
        vec![ModelData::new("openconfig-system", "0.3.0").with_organization("OpenConfig")],
        Arc::new(RootFactory::<Device>::new()),
        Arc::new(sample_schema()),
        RecordingUnmarshaler::new().unmarshaler(),
        sample_enum_data(),
    );
    assert_eq!(model.supported_models(), vec!["openconfig-system 0.3.0"]);
}

#[test]
fn empty_hostname_is_validation_failure() {
    let model = sample_model();
    let err = model
        .new_config_struct(Some(br#"{ "system": { "hostname": "" } }"#.as_slice()))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid config: /system/config/hostname: hostname must not be empty"
    );
    assert!(
        model
            .new_config_struct(Some(br#"{ "system": { "hostname": "r1" } }"#.as_slice()))
            .is_ok()
    );
}
