use crate::error::ConfigError;
use crate::settings::Logging;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, prelude::*, registry::Registry};

/// Initializes the global tracing subscriber.
///
/// Console output goes to stderr so that stdout carries only the rendered views.
/// `RUST_LOG` overrides `logging.level`. When `logging.directory` is set, a JSON
/// layer writes to a daily rolling file; the returned guard must be held until
/// exit for that file to be flushed.
pub fn init_logging(settings: &Logging) -> Result<Option<WorkerGuard>, ConfigError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.level)
            .map_err(|e| ConfigError::Logging(format!("invalid level '{}': {e}", settings.level)))?,
    };

    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
    let registry = Registry::default().with(env_filter).with(console_layer);

    match &settings.directory {
        Some(directory) => {
            let appender = rolling::daily(directory, "bizcase.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            registry
                .with(fmt::layer().json().with_writer(writer).with_target(true))
                .try_init()
                .map_err(|e| ConfigError::Logging(e.to_string()))?;
            Ok(Some(guard))
        }
        None => {
            registry
                .try_init()
                .map_err(|e| ConfigError::Logging(e.to_string()))?;
            Ok(None)
        }
    }
}
