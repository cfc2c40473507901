use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod types;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use types::{AdditionalInfoLink, LookupQuery, StayPolicy, VisaResult, VisaType};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("query field \"{0}\" is required and must be non-empty")]
    MissingField(&'static str),

    #[error("max_fetch_limit must be at least 1 (got {0})")]
    InvalidFetchLimit(u32),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
