use crate::estimator::Estimate;
use crate::formatting::{ColoredFormatter, FormattingConfig, OutputFormatter};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// One estimate plus the context its renderings need.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateReport {
    pub benchmark_index: f64,
    pub estimate: Estimate,
    /// URL placeholder embedded in the suggested command line; not part of
    /// the serialized report.
    #[serde(skip)]
    pub url: String,
}

impl EstimateReport {
    /// Ready-to-paste lighthouse invocation for a prediction.
    pub fn command_line(&self) -> Option<String> {
        match &self.estimate {
            Estimate::Prediction { multiplier, .. } => Some(format!(
                "lighthouse --throttling.cpuSlowdownMultiplier={multiplier:.1} {}",
                self.url
            )),
            Estimate::Warning { .. } => None,
        }
    }
}

pub trait OutputWriter {
    fn write_estimate(&mut self, report: &EstimateReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_estimate(&mut self, report: &EstimateReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_estimate(&mut self, report: &EstimateReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# CPU Throttling Estimate")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "BenchmarkIndex: {}",
            format_score(report.benchmark_index)
        )?;
        writeln!(self.writer)?;

        match &report.estimate {
            Estimate::Prediction { multiplier, range } => {
                writeln!(self.writer, "| Metric | Value |")?;
                writeln!(self.writer, "|--------|-------|")?;
                writeln!(self.writer, "| Multiplier | {multiplier:.1}x |")?;
                writeln!(
                    self.writer,
                    "| Range | {:.1}x - {:.1}x |",
                    range.0, range.1
                )?;
                writeln!(self.writer)?;
                if let Some(command) = report.command_line() {
                    writeln!(self.writer, "```")?;
                    writeln!(self.writer, "{command}")?;
                    writeln!(self.writer, "```")?;
                }
            }
            Estimate::Warning { message } => {
                writeln!(self.writer, "> **Warning**: {message}")?;
            }
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: ColoredFormatter,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: ColoredFormatter::new(config),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_estimate(&mut self, report: &EstimateReport) -> anyhow::Result<()> {
        match &report.estimate {
            Estimate::Prediction { multiplier, range } => {
                writeln!(
                    self.writer,
                    "{}",
                    self.formatter.bold(&format!("{multiplier:.1}x"))
                )?;
                writeln!(
                    self.writer,
                    "{}",
                    self.formatter
                        .dim(&format!("{:.1}x - {:.1}x", range.0, range.1))
                )?;
                if let Some(command) = report.command_line() {
                    writeln!(self.writer, "{command}")?;
                }
            }
            Estimate::Warning { message } => {
                writeln!(self.writer, "{}", self.formatter.warning("Warning"))?;
                writeln!(self.writer, "{message}")?;
            }
        }
        Ok(())
    }
}

pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
    formatting: FormattingConfig,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    match output {
        Some(path) => {
            let file = File::create(path)?;
            Ok(boxed_writer(format, file, FormattingConfig::plain()))
        }
        None => Ok(boxed_writer(format, std::io::stdout(), formatting)),
    }
}

fn boxed_writer<W: Write + 'static>(
    format: OutputFormat,
    writer: W,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}

/// Echo the score the way the user typed it where we can (no trailing .0 for
/// whole numbers).
fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.abs() < 1e15 {
        format!("{}", score as i64)
    } else {
        format!("{score}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::estimate;

    fn report_for(score: f64) -> EstimateReport {
        EstimateReport {
            benchmark_index: score,
            estimate: estimate(score).expect("finite score"),
            url: "<url>".to_string(),
        }
    }

    #[test]
    fn test_command_line_embeds_rounded_multiplier() {
        let report = report_for(1000.0);
        assert_eq!(
            report.command_line().unwrap(),
            "lighthouse --throttling.cpuSlowdownMultiplier=2.4 <url>"
        );
    }

    #[test]
    fn test_command_line_absent_for_warnings() {
        let report = report_for(100.0);
        assert_eq!(report.command_line(), None);
    }

    #[test]
    fn test_json_writer_tags_the_estimate() {
        let mut buf = Vec::new();
        JsonWriter::new(&mut buf)
            .write_estimate(&report_for(1000.0))
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["benchmarkIndex"], 1000.0);
        assert_eq!(value["estimate"]["kind"], "prediction");
        assert_eq!(value["estimate"]["multiplier"], 2.4);
    }

    #[test]
    fn test_terminal_writer_renders_warning() {
        let mut buf = Vec::new();
        TerminalWriter::new(&mut buf, FormattingConfig::plain())
            .write_estimate(&report_for(100.0))
            .unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Warning\n"));
        assert!(text.contains("too slow"));
    }

    #[test]
    fn test_format_score_drops_trailing_zero() {
        assert_eq!(format_score(1000.0), "1000");
        assert_eq!(format_score(1234.5), "1234.5");
    }
}
