//! Build-time Configuration
//!
//! Values are baked in with `option_env!` when the WASM bundle is built.

use std::str::FromStr;

use log::LevelFilter;

const DEFAULT_STORAGE_KEY: &str = "schema-board";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// localStorage key holding the `{ schemas: [...] }` blob
    pub storage_key: String,
    pub log_level: LevelFilter,
    /// Whether the bootstrap payload contains a sample schema
    pub seed_sample: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
            seed_sample: true,
        }
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("SCHEMA_BOARD_STORAGE_KEY"),
            option_env!("SCHEMA_BOARD_LOG"),
            option_env!("SCHEMA_BOARD_SEED"),
        )
    }

    fn from_values(storage_key: Option<&str>, log_level: Option<&str>, seed: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            storage_key: storage_key
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.storage_key),
            log_level: log_level
                .and_then(|l| LevelFilter::from_str(l.trim()).ok())
                .unwrap_or(defaults.log_level),
            seed_sample: seed
                .map(|s| !matches!(s.trim(), "0" | "false" | "off"))
                .unwrap_or(defaults.seed_sample),
        }
    }
}
