use crate::config::Config;
use crate::estimator;
use crate::io::output::{create_writer, EstimateReport, OutputFormat};
use anyhow::Result;
use std::path::PathBuf;

pub struct EstimateConfig {
    pub score: String,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub url: Option<String>,
    pub plain: bool,
}

/// Runs a single score through the estimator and renders the result.
///
/// Absent input (unparseable text or a non-finite score) renders nothing and
/// exits cleanly, mirroring a calculator clearing its display.
pub fn run(config: EstimateConfig) -> Result<()> {
    let file_config = Config::load()?;
    let settings =
        super::resolve_render_settings(config.format, config.url, config.plain, &file_config);

    let Some(score) = super::parse_score(&config.score) else {
        return Ok(());
    };
    let Some(estimate) = estimator::estimate(score) else {
        return Ok(());
    };

    let report = EstimateReport {
        benchmark_index: score,
        estimate,
        url: settings.url,
    };

    let mut writer = create_writer(settings.format, config.output.as_deref(), settings.formatting)?;
    writer.write_estimate(&report)
}
