use crate::device::Device;
use gnmi_rs_model::{JsonUnmarshaler, ValidatedConfig, unmarshal_json};
use parking_lot::Mutex;
use std::sync::Arc;

/// Unmarshaler decoding into [`Device`] that records every payload it sees.
#[derive(Clone, Default)]
pub struct RecordingUnmarshaler {
    payloads: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl RecordingUnmarshaler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unmarshaler(&self) -> JsonUnmarshaler {
        let payloads = Arc::clone(&self.payloads);
        Arc::new(move |json: &[u8], target: &mut dyn ValidatedConfig| {
            payloads.lock().push(json.to_vec());
            unmarshal_json::<Device>(json, target)
        })
    }

    pub fn calls(&self) -> usize {
        self.payloads.lock().len()
    }

    pub fn payloads(&self) -> Vec<Vec<u8>> {
        self.payloads.lock().clone()
    }
}
