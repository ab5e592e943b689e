//! Logger initialization for the ccplain binary.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Initialize the global logger. With a log file all output goes there,
/// otherwise it goes to stderr.
pub fn initialize(level: LevelFilter, log_file: Option<&Path>) {
    let config = build_config();

    let logger: Box<dyn SharedLogger> = match log_file {
        Some(path) => match File::create(path) {
            Ok(file) => WriteLogger::new(level, config, file),
            Err(err) => {
                eprintln!(
                    "Warning: Could not create log file at {:?}: {}",
                    path, err
                );
                term_logger(level, build_config())
            }
        },
        None => term_logger(level, config),
    };

    let _ = CombinedLogger::init(vec![logger]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn term_logger(level: LevelFilter, config: Config) -> Box<TermLogger> {
    TermLogger::new(level, config, TerminalMode::Stderr, ColorChoice::Auto)
}
