use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "throttlecalc")]
#[command(about = "CPU throttling multiplier calculator for Lighthouse", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate the cpuSlowdownMultiplier for a BenchmarkIndex score
    Estimate {
        /// BenchmarkIndex score; empty or unparseable input renders nothing
        score: String,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// URL embedded in the suggested lighthouse command
        #[arg(long)]
        url: Option<String>,

        /// Disable colored output
        #[arg(long)]
        plain: bool,
    },

    /// Read scores line by line from stdin, estimating each in turn
    Repl {
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// URL embedded in the suggested lighthouse command
        #[arg(long)]
        url: Option<String>,

        /// Disable colored output
        #[arg(long)]
        plain: bool,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
