//! Configuration validation.
//!
//! # Responsibilities
//! - Decide whether the upstream settings are complete enough to forward
//! - Report every missing variable, not just the first
//!
//! # Design Decisions
//! - Pure function over `UpstreamConfig`; runs at startup (warning only)
//!   and again on every request (rejection)
//! - Only unset or empty values count as missing

use crate::config::schema::UpstreamConfig;

/// Borrowed view of a complete upstream configuration.
#[derive(Debug, Clone, Copy)]
pub struct UpstreamSettings<'a> {
    pub api_url: &'a str,
    pub api_user: &'a str,
    pub api_pass: &'a str,
    pub api_username_field: &'a str,
}

/// Environment variable names of the required values that are absent.
pub fn missing_upstream_vars(upstream: &UpstreamConfig) -> Vec<&'static str> {
    [
        ("API_URL", &upstream.api_url),
        ("API_BASIC_AUTH_USER", &upstream.api_user),
        ("API_BASIC_AUTH_PASS", &upstream.api_pass),
        ("API_USERNAME_FIELD", &upstream.api_username_field),
    ]
    .into_iter()
    .filter(|(_, value)| present(value).is_none())
    .map(|(key, _)| key)
    .collect()
}

/// Returns the required settings when all four are present and non-empty.
pub fn upstream_settings(upstream: &UpstreamConfig) -> Option<UpstreamSettings<'_>> {
    Some(UpstreamSettings {
        api_url: present(&upstream.api_url)?,
        api_user: present(&upstream.api_user)?,
        api_pass: present(&upstream.api_pass)?,
        api_username_field: present(&upstream.api_username_field)?,
    })
}

/// Parse error for a configured `API_URL` that is not an absolute URL.
pub fn invalid_api_url(upstream: &UpstreamConfig) -> Option<String> {
    let raw = present(&upstream.api_url)?;
    match url::Url::parse(raw) {
        Ok(_) => None,
        Err(e) => Some(e.to_string()),
    }
}

/// `Some` only for a non-empty value.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
