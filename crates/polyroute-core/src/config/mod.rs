//! Configuration management for the detector

mod defaults;
mod env_loader;
mod file_loader;
mod logging_config;
mod model;

pub use defaults::{
    DEFAULT_CONFIG_FILES, load_config, load_config_from_file, load_config_with_file,
};
pub use env_loader::{
    ENV_LOG_FORMAT, ENV_LOG_LEVEL, ENV_STRATEGIES, ENV_STRATEGY_TIMEOUT_MS, ENV_THRESHOLD,
    apply_env_overrides, apply_overrides_from,
};
pub use file_loader::{load_from_file, render_config};
pub use logging_config::LoggingConfig;
pub use model::DetectorConfig;
