use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
///
/// Every variable has a default; the only failure mode is an unparseable value.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let log_level = or_default("VISASCAN_LOG_LEVEL", "info");
    let output_dir = PathBuf::from(or_default("VISASCAN_OUTPUT_DIR", "./storage"));
    let wiki_base_url = or_default("VISASCAN_WIKI_BASE_URL", "https://en.wikipedia.org");

    let request_timeout_secs = parse_u64("VISASCAN_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default(
        "VISASCAN_USER_AGENT",
        "visascan/0.1 (visa-requirements-lookup)",
    );
    let max_retries = parse_u32("VISASCAN_MAX_RETRIES", "3")?;
    let retry_backoff_base_secs = parse_u64("VISASCAN_RETRY_BACKOFF_BASE_SECS", "5")?;

    let translate_api_key = lookup("TRANSLATE_API_KEY").ok();
    let translate_base_url = or_default("VISASCAN_TRANSLATE_BASE_URL", "https://engine.lingo.dev");
    let translate_timeout_secs = parse_u64("VISASCAN_TRANSLATE_TIMEOUT_SECS", "30")?;

    Ok(AppConfig {
        log_level,
        output_dir,
        wiki_base_url,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_secs,
        translate_api_key,
        translate_base_url,
        translate_timeout_secs,
    })
}
