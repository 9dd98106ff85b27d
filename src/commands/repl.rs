use crate::config::Config;
use crate::estimator;
use crate::io::output::{create_writer, EstimateReport, OutputFormat, OutputWriter};
use anyhow::Result;
use std::io::BufRead;

pub struct ReplConfig {
    pub format: Option<OutputFormat>,
    pub url: Option<String>,
    pub plain: bool,
}

/// Reads scores line by line from stdin and estimates each in turn, the
/// command-line analogue of retyping into the calculator's input field.
pub fn run(config: ReplConfig) -> Result<()> {
    let file_config = Config::load()?;
    let settings =
        super::resolve_render_settings(config.format, config.url, config.plain, &file_config);

    let mut writer = create_writer(settings.format, None, settings.formatting)?;
    let stdin = std::io::stdin();
    run_loop(stdin.lock(), writer.as_mut(), &settings.url)
}

pub fn run_loop<R: BufRead>(
    reader: R,
    writer: &mut dyn OutputWriter,
    url: &str,
) -> Result<()> {
    for line in reader.lines() {
        let line = line?;

        // Blank or unparseable lines render nothing, same as clearing the input
        let Some(score) = super::parse_score(&line) else {
            continue;
        };
        let Some(estimate) = estimator::estimate(score) else {
            continue;
        };

        writer.write_estimate(&EstimateReport {
            benchmark_index: score,
            estimate,
            url: url.to_string(),
        })?;
    }
    Ok(())
}
