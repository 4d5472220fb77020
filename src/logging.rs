//! File logging via log4rs.
//!
//! The terminal is the game's screen, so nothing may be logged to stdout or
//! stderr while it runs. Logs go to a file, or nowhere.

use anyhow::{Context, Result};
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

use crate::config::GameConfig;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l} {t} {m}{n}";

/// Install the global logger if a log path is configured.
///
/// Returns whether a logger was installed.
pub fn init(config: &GameConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(path)
        .with_context(|| format!("cannot open log file {path}"))?;

    let log_config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(config.log_level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(config.log_level))
        .context("invalid logging configuration")?;

    log4rs::init_config(log_config).context("logger already installed")?;
    Ok(true)
}
