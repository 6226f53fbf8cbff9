//! Public SDK surface for gnmi-rs.
//!
//! This crate re-exports the model adapter and protocol types and provides a
//! small initialization helper to keep consumer setup consistent.

/// Re-export for convenience.
pub use gnmi_rs_model as model;
/// Re-export for convenience.
pub use gnmi_rs_protocol as protocol;

pub use gnmi_rs_model::{Model, ModelCatalog, ModelError};

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
///
/// This is a no-op if the feature is not enabled. Binaries are still expected
/// to call this early in startup to ensure log output is wired up.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::try_init();
    }
}

/// Render supported model strings for the `gnmi-models` listing.
///
/// Plain mode writes one model per line; JSON mode writes a pretty-printed
/// array. An empty list renders as an empty string or `[]`.
pub fn render_models(models: &[String], json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(models)?);
    }
    Ok(models.join("\n"))
}
