// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod estimator;
pub mod formatting;
pub mod io;

// Re-export commonly used types
pub use crate::config::{Config, ConfigError};
pub use crate::estimator::{estimate, Estimate, SLOW_DEVICE_MESSAGE};
pub use crate::formatting::{ColorMode, ColoredFormatter, FormattingConfig, OutputFormatter};
pub use crate::io::output::{create_writer, EstimateReport, OutputFormat, OutputWriter};
