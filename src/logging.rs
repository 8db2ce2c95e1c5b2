use anyhow::{Context, Result};
use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::fs::File;
use std::path::Path;

pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Batch runs log to stderr. The interactive view owns the terminal, so
/// there it only logs when a file is given.
pub fn init_logging(verbosity: u8, log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let level = level_for_verbosity(verbosity);
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if !interactive {
        loggers.push(TermLogger::new(
            level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Unable to create log file: {}", path.display()))?;
        // A log file is only asked for when debugging, so never go below debug
        loggers.push(WriteLogger::new(level.max(LevelFilter::Debug), Config::default(), file));
    }

    if loggers.is_empty() {
        return Ok(());
    }

    CombinedLogger::init(loggers).context("Logger already initialized")
}
