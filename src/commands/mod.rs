pub mod estimate;
pub mod init;
pub mod repl;

use crate::config::Config;
use crate::formatting::FormattingConfig;
use crate::io::output::OutputFormat;

/// Parses user text into a score. Empty or unparseable input is the
/// "no estimate yet" state, not an error.
pub fn parse_score(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok()
}

/// How an estimate gets rendered once flags and config are reconciled.
/// Flags win over config; config wins over defaults.
pub struct RenderSettings {
    pub format: OutputFormat,
    pub url: String,
    pub formatting: FormattingConfig,
}

pub fn resolve_render_settings(
    format: Option<OutputFormat>,
    url: Option<String>,
    plain: bool,
    config: &Config,
) -> RenderSettings {
    let format = format
        .or(config.output.default_format)
        .unwrap_or(OutputFormat::Terminal);

    let formatting = if plain || config.output.plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };

    RenderSettings {
        format,
        url: url.unwrap_or_else(|| config.snippet.url.clone()),
        formatting,
    }
}
