//! Gateway config loader (environment-sourced, strict parsing).

pub mod schema;

use std::env;

use unitgate_core::error::{Result, UnitGateError};
use unitgate_core::policy::SecurityConfig;

pub use schema::{GatewayConfig, ServiceRecord};

pub const ENV_API_KEY: &str = "UNITGATE_API_KEY";
pub const ENV_PORT: &str = "UNITGATE_PORT";
pub const ENV_SERVICES: &str = "UNITGATE_SERVICES";
pub const ENV_ALLOWED_HOSTS: &str = "UNITGATE_ALLOWED_HOSTS";

const DEFAULT_PORT: u16 = 8080;

/// Load the configuration snapshot from process environment variables.
pub fn load_from_env() -> Result<GatewayConfig> {
    load_from_vars(|key| env::var(key).ok())
}

/// Load from an arbitrary variable source. Tests inject closures here
/// instead of mutating the process environment.
pub fn load_from_vars(var: impl Fn(&str) -> Option<String>) -> Result<GatewayConfig> {
    let api_key = var(ENV_API_KEY).filter(|k| !k.is_empty());

    let port = match var(ENV_PORT) {
        Some(raw) => raw.parse::<u16>().map_err(|_| {
            UnitGateError::ConfigInvalid(format!("{ENV_PORT} must be a port number, got {raw:?}"))
        })?,
        None => DEFAULT_PORT,
    };

    let services_json = var(ENV_SERVICES).unwrap_or_else(|| "[]".to_string());
    let services: Vec<ServiceRecord> = serde_json::from_str(&services_json)
        .map_err(|e| UnitGateError::ConfigInvalid(format!("{ENV_SERVICES} must be valid JSON: {e}")))?;

    // Comma-separated; entries trimmed, empties dropped. Unset or blank
    // means no host restriction.
    let allowed_hosts: Vec<String> = var(ENV_ALLOWED_HOSTS)
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(str::to_string)
        .collect();

    let cfg = GatewayConfig {
        port,
        services,
        security: SecurityConfig {
            api_key,
            allowed_hosts,
        },
    };
    cfg.validate()?;
    Ok(cfg)
}
