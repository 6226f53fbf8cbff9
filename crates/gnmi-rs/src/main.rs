//! Lists the schema modules a gNMI target advertises, from its model catalog.

use anyhow::Context;
use clap::Parser;
use gnmi_rs::{ModelCatalog, render_models};
use log::{debug, info};
use std::path::PathBuf;

/// Command-line options for the catalog listing.
#[derive(Parser)]
#[command(name = "gnmi-models", version)]
struct Cli {
    /// Path to a models.json5 catalog (defaults to ~/.gnmi/models.json5)
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Print supported models as a JSON array
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let _ = env_logger::builder()
        .format_timestamp_millis()
        .parse_default_env()
        .try_init();

    let cli = Cli::parse();
    let catalog = match cli.catalog.as_ref() {
        Some(path) => ModelCatalog::load_from_path(path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?,
        None => {
            if let Some(path) = ModelCatalog::default_path() {
                debug!("using default catalog path: {}", path.display());
            }
            ModelCatalog::load_default().context("failed to load default catalog")?
        }
    };

    let models = catalog.supported_models();
    info!("catalog loaded (models={})", models.len());
    let output = render_models(&models, cli.json)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
