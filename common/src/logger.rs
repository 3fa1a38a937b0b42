use crate::config::AppConfig;
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global tracing subscriber.
///
/// Logs always go to a daily-rolling file `{log_dir}/{config.log_file}`; with
/// `log_to_stdout` they are mirrored to stdout. The filter comes from
/// `config.log_level` in `EnvFilter` syntax, falling back to `info`.
///
/// Keep the returned guard alive for the life of the process or buffered lines are lost.
pub fn init_logging(config: &AppConfig, log_dir: impl AsRef<Path>) -> WorkerGuard {
    let log_dir = log_dir.as_ref();
    fs::create_dir_all(log_dir).ok();

    let file_appender = rolling::daily(log_dir, &config.log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = config.log_to_stdout.then(|| {
        fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_target(true)
    });

    let env_filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .is_err()
    {
        eprintln!("tracing subscriber already installed; keeping the existing one");
    }

    guard
}
