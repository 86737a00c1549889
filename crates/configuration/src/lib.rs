use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod loader;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use loader::{GroupedParametersDocument, SeedResults, load_parameter_groups, load_seed_results};
pub use logging::init_logging;
pub use settings::{Config, DataSources, Display, Logging};

/// The settings file looked up when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Command-line arguments shared by every subcommand for locating the settings file.
#[cfg(feature = "clap")]
#[derive(Debug, Clone, clap::Args)]
pub struct ConfigArgs {
    /// Path to the settings file (defaults to ./config.toml when present).
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,
}

/// Loads the application configuration.
///
/// Sources, lowest precedence first: built-in defaults, the settings file, and
/// `BIZCASE__*` environment variables (e.g. `BIZCASE__DATA__SEED_RESULTS`). The
/// default `config.toml` is optional; an explicitly given path must exist.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut builder = config::Config::builder();
    for (key, value) in Config::DEFAULTS {
        builder = builder.set_default(key, value)?;
    }
    builder = builder.set_default("display.chart_width", Config::DEFAULT_CHART_WIDTH)?;

    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let settings = builder
        .add_source(file)
        .add_source(
            config::Environment::with_prefix("BIZCASE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = settings.try_deserialize::<Config>()?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.display.chart_width == 0 {
        return Err(ConfigError::ValidationError(
            "display.chart_width must be greater than 0".to_string(),
        ));
    }
    Ok(())
}
