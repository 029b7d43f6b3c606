use crate::error::{CliError, Result as CliErrorResult};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, info};

/// Install the global logger.
///
/// Records go to `log_file` when set, otherwise to stderr so that stdout
/// carries nothing but the command's JSON result. `colored` only applies to
/// stderr.
#[track_caller]
pub fn initialize(
    log_level: fin_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> CliErrorResult<()> {
    let level_filter = *log_level;

    let colors = (colored && log_file.is_none()).then(|| {
        ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red)
    });

    let dispatch = Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", level_filter.min(LevelFilter::Warn))
        .format(move |out, message, record| {
            let date = humantime::format_rfc3339(SystemTime::now());
            let file = record.file().unwrap_or("unknown");
            let line = record.line().unwrap_or(0);
            match colors {
                Some(colors) => out.finish(format_args!(
                    "[{date} - {}] {message} [{file}:{line}]",
                    colors.color(record.level())
                )),
                None => out.finish(format_args!(
                    "[{date} - {}] {message} [{file}:{line}]",
                    record.level()
                )),
            }
        });

    let dispatch = match &log_file {
        Some(log_path) => dispatch.chain(fern::log_file(log_path).map_err(|e| {
            CliError::logger(format!(
                "Cannot open log file {}: {}",
                log_path.display(),
                e
            ))
        })?),
        None => dispatch.chain(std::io::stderr()),
    };

    dispatch
        .apply()
        .map_err(|e| CliError::logger(format!("Logger already installed: {e}")))?;

    match &log_file {
        Some(path) => info!("Logging at {} to {}", level_filter, path.display()),
        None => info!("Logging at {} to stderr", level_filter),
    }

    Ok(())
}
