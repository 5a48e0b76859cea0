use std::path::PathBuf;

use anyhow::Result;
use tracing::info;
use veil_config::Config;
use veil_engine::Engine;

use crate::dataset;

pub fn handle(
    config: &Config,
    viewer: Option<String>,
    decorate: Vec<String>,
    data: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let viewer = viewer.unwrap_or_else(|| config.default_viewer.clone());
    let tokens = if decorate.is_empty() {
        config.decorators.clone()
    } else {
        decorate
    };

    let records = dataset::load_or_sample(data.as_deref())?;
    info!(
        "Rendering {} records for viewer role '{}'",
        records.len(),
        viewer
    );

    let engine = Engine::from_tokens(&tokens);
    let lines = engine.process(&viewer, &records);

    if json {
        println!("{}", serde_json::to_string_pretty(&lines)?);
    } else {
        for line in lines {
            println!("{}", line);
        }
    }

    Ok(())
}
