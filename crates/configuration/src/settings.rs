use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub data: DataSources,
    pub display: Display,
    pub logging: Logging,
}

/// Locations of the two static data documents.
#[derive(Debug, Clone, Deserialize)]
pub struct DataSources {
    /// The grouped parameter document (`{"inputGroups": {...}}`).
    pub parameter_groups: PathBuf,
    /// The previously computed results shown before the first recompute.
    pub seed_results: PathBuf,
}

/// Contains parameters for the terminal presentation.
#[derive(Debug, Clone, Deserialize)]
pub struct Display {
    /// Width, in characters, of the longest bar in a text chart.
    pub chart_width: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Logging {
    /// Default filter directive; `RUST_LOG` takes precedence when set.
    pub level: String,
    /// When set, logs are also written as JSON to a daily rolling file in this directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Config {
    pub(crate) const DEFAULTS: [(&'static str, &'static str); 3] = [
        ("data.parameter_groups", "data/data-grouped.json"),
        ("data.seed_results", "data/data.json"),
        ("logging.level", "info"),
    ];
    pub(crate) const DEFAULT_CHART_WIDTH: i64 = 40;
}
