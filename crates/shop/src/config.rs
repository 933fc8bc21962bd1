//! Environment-driven configuration for the simulator.

use std::path::PathBuf;

use gildedrose_observability::LogFormat;

pub const DAYS_VAR: &str = "GILDED_ROSE_DAYS";
pub const INVENTORY_VAR: &str = "GILDED_ROSE_INVENTORY";
pub const LOG_FORMAT_VAR: &str = "GILDED_ROSE_LOG_FORMAT";

const DEFAULT_DAYS: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    /// Number of day ticks to simulate.
    pub days: u32,
    /// JSON array of items to load instead of the opening stock.
    pub inventory_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            inventory_path: None,
            log_format: LogFormat::default(),
        }
    }
}

impl ShopConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unparsable values fall back to their defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let days = match lookup(DAYS_VAR) {
            Some(raw) => raw.trim().parse::<u32>().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "{DAYS_VAR} is not a day count; using {DEFAULT_DAYS}");
                DEFAULT_DAYS
            }),
            None => DEFAULT_DAYS,
        };

        let inventory_path = lookup(INVENTORY_VAR)
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => LogFormat::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "unknown {LOG_FORMAT_VAR}; using json");
                LogFormat::Json
            }),
            None => LogFormat::default(),
        };

        Self {
            days,
            inventory_path,
            log_format,
        }
    }
}
