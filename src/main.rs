use anyhow::Result;
use clap::Parser;
use throttlecalc::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Estimate {
            score,
            format,
            output,
            url,
            plain,
        } => {
            let config = throttlecalc::commands::estimate::EstimateConfig {
                score,
                format: format.map(Into::into),
                output,
                url,
                plain,
            };
            throttlecalc::commands::estimate::run(config)
        }
        Commands::Repl { format, url, plain } => {
            let config = throttlecalc::commands::repl::ReplConfig {
                format: format.map(Into::into),
                url,
                plain,
            };
            throttlecalc::commands::repl::run(config)
        }
        Commands::Init { force } => throttlecalc::commands::init::init_config(force),
    }
}
