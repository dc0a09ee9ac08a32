//! Run orchestration: fetch, rank, report

use crate::config::WeathertopConfig;
use crate::weather::WeatherClient;
use crate::{ranking, report};
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// Fetch observations for the configured cities, rank them, and write the
/// temperature and wind rankings into `out_dir`.
///
/// Fail-fast: the first error aborts the remaining steps, with no rollback
/// of files already written. With zero records there is nothing to rank;
/// the run completes successfully and no files are written.
pub fn run(config: WeathertopConfig, out_dir: &Path) -> Result<()> {
    let client = WeatherClient::new(config)?;

    let records = client.fetch_all()?;
    if records.is_empty() {
        info!("no cities configured, nothing to rank");
        return Ok(());
    }

    let rankings = ranking::rank(&records);

    report::write_ranking(&rankings.temperature, out_dir, report::TEMPERATURE_BASENAME)?;
    report::write_ranking(&rankings.wind, out_dir, report::WIND_BASENAME)?;

    Ok(())
}
