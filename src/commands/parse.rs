use std::path::PathBuf;

use anyhow::{Context, Result};
use paws_core::PawsConfig;

use super::{Input, render_all};

pub async fn run(cfg: &PawsConfig, files: Vec<PathBuf>, pretty: bool) -> Result<()> {
    let format = cfg.display_format()?;

    let mut inputs = Vec::with_capacity(files.len());
    for path in files {
        let body = tokio::fs::read(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        inputs.push(Input {
            label: path.display().to_string(),
            body,
        });
    }

    render_all(inputs, &format, pretty).await
}
