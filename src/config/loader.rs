//! Configuration loading from the process environment.

use thiserror::Error;

use crate::config::schema::{LogFormat, ProxyConfig};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    /// The `.env` file exists but could not be read.
    #[error("failed to load .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),
}

/// Load configuration from the environment, after merging a `.env` file
/// from the working directory if one exists.
pub fn load_config() -> Result<ProxyConfig, ConfigError> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e.into()),
    }
    load_from(|key| std::env::var(key).ok())
}

/// Build a configuration from an arbitrary variable lookup.
///
/// Unset or empty optional values fall back to their defaults.
pub fn load_from<F>(lookup: F) -> Result<ProxyConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let mut config = ProxyConfig::default();

    if let Some(host) = get("HOST") {
        config.listener.host = host;
    }
    if let Some(port) = get("PORT") {
        config.listener.port = parse_number("PORT", port)?;
    }

    // Kept verbatim, empty included; validation decides what counts as missing.
    config.upstream.api_url = lookup("API_URL");
    config.upstream.api_user = lookup("API_BASIC_AUTH_USER");
    config.upstream.api_pass = lookup("API_BASIC_AUTH_PASS");
    config.upstream.api_username_field = lookup("API_USERNAME_FIELD");
    config.upstream.default_date = lookup("API_DEFAULT_DATE");
    config.upstream.no_proxy = get("API_NO_PROXY")
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(false);

    if let Some(secs) = get("API_TIMEOUT_SECS") {
        config.timeouts.upstream_secs = parse_positive("API_TIMEOUT_SECS", secs)?;
    }
    if let Some(secs) = get("API_CONNECT_TIMEOUT_SECS") {
        config.timeouts.connect_secs = parse_positive("API_CONNECT_TIMEOUT_SECS", secs)?;
    }

    if let Some(format) = get("LOG_FORMAT") {
        config.observability.log_format = LogFormat::from_env_value(&format);
    }
    config.observability.metrics_address = get("METRICS_ADDRESS");

    Ok(config)
}

fn parse_number<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value.trim().parse() {
        Ok(n) => Ok(n),
        Err(e) => Err(ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}

fn parse_positive(key: &'static str, value: String) -> Result<u64, ConfigError> {
    let n: u64 = parse_number(key, value.clone())?;
    if n == 0 {
        return Err(ConfigError::Invalid {
            key,
            value,
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(n)
}
