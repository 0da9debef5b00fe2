use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use projection_core::{Dataset, LoadReport};
use std::path::Path;

use crate::config::AppConfig;

/// Reads both data files and normalizes them into a [`Dataset`].
pub async fn load_dataset(config: &AppConfig) -> Result<(Dataset, LoadReport)> {
    let historical_path = config.historical_path();
    let projections_path = config.projections_path();

    let (historical, projections) = tokio::try_join!(
        read_data_file(&historical_path),
        read_data_file(&projections_path)
    )?;

    Dataset::from_json(&historical, &projections)
        .wrap_err_with(|| format!("Invalid data in {}", config.data_dir.display()))
}

async fn read_data_file(path: &Path) -> Result<String> {
    tracing::debug!(path = %path.display(), "reading data file");
    tokio::fs::read_to_string(path)
        .await
        .wrap_err_with(|| format!("Failed to read {}", path.display()))
}
