//! Configuration module
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (GARMENT_IMPACT_*)
//! 3. Project config (./garment-impact.toml)
//! 4. User config (<config dir>/garment-impact/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod suggest;
mod types;

pub use loader::{
    user_config_path, ConfigWarning, ENV_CONFIG, ENV_FORMAT, ENV_LOG, ENV_PRECISION,
    MAX_PRECISION, PROJECT_CONFIG_FILE,
};
pub use types::{
    Config, EquivalentsConfig, FactorEntry, LoadedConfig, LoggingConfig, OutputConfig,
    OutputFormat, TableConfig,
};
