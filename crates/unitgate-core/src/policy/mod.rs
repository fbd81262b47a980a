//! Security policy (request admission + CORS derivation).
//!
//! Two independently toggleable methods: an API key carried as a bearer
//! token, and a host allowlist matched against the connection peer address.
//! With neither configured the policy grants everything — the reverse-proxy
//! deployment posture where an upstream component already enforces access.
//!
//! Construct one [`SecurityPolicy`] at startup from the config snapshot,
//! then share it via Arc; evaluation takes no locks and keeps no state.

pub mod allowlist;

use subtle::ConstantTimeEq;

/// Resolved security configuration. Immutable after load; rebuilt wholesale
/// on reload, never mutated field-by-field.
#[derive(Debug, Clone, Default)]
pub struct SecurityConfig {
    /// Bearer token required on protected routes. `None` or empty disables
    /// the API key method.
    pub api_key: Option<String>,
    /// Allowlist entries: `localhost`, CIDR networks, exact IPs, or opaque
    /// hostnames. Empty disables the host restriction method.
    pub allowed_hosts: Vec<String>,
}

impl SecurityConfig {
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    pub fn has_host_restriction(&self) -> bool {
        !self.allowed_hosts.is_empty()
    }
}

/// Failure class of a denial; selects the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialClass {
    /// Identity failure: API key configured and not satisfied (401).
    Unauthorized,
    /// Network-origin failure only (403).
    Forbidden,
}

/// Outcome of one admission check. Ephemeral, produced per request, never
/// stored.
#[derive(Debug, Clone)]
pub struct AccessDecision {
    pub granted: bool,
    /// Human-readable denial reasons; independent flags, both methods can
    /// appear at once.
    pub reasons: Vec<String>,
    pub denial: Option<DenialClass>,
}

impl AccessDecision {
    fn granted() -> Self {
        Self {
            granted: true,
            reasons: Vec::new(),
            denial: None,
        }
    }
}

/// Per-request admission decisions over one immutable [`SecurityConfig`].
#[derive(Debug, Clone)]
pub struct SecurityPolicy {
    config: SecurityConfig,
}

impl SecurityPolicy {
    pub fn new(config: SecurityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SecurityConfig {
        &self.config
    }

    /// Decide whether a request may proceed.
    ///
    /// Every configured method must pass independently (AND over the
    /// configured methods, not OR). A failed API key check classifies the
    /// denial as [`DenialClass::Unauthorized`] regardless of the host
    /// outcome; a pure host failure is [`DenialClass::Forbidden`].
    pub fn evaluate(&self, client_ip: &str, bearer: Option<&str>) -> AccessDecision {
        let cfg = &self.config;

        if !cfg.has_api_key() && !cfg.has_host_restriction() {
            tracing::debug!(client = %client_ip, "access granted (no security configured)");
            return AccessDecision::granted();
        }

        let api_key_ok = match (cfg.api_key.as_deref(), bearer) {
            (Some(key), Some(token)) if !key.is_empty() => constant_time_eq(token, key),
            _ => false,
        };

        let host_ok =
            cfg.has_host_restriction() && allowlist::host_matches(client_ip, &cfg.allowed_hosts);

        let granted = if cfg.has_api_key() && cfg.has_host_restriction() {
            api_key_ok && host_ok
        } else if cfg.has_api_key() {
            api_key_ok
        } else {
            host_ok
        };

        if granted {
            return AccessDecision::granted();
        }

        let mut reasons = Vec::new();
        if cfg.has_api_key() && !api_key_ok {
            reasons.push("invalid or missing API key".to_string());
        }
        if cfg.has_host_restriction() && !host_ok {
            reasons.push(format!("host {client_ip} not in allowed list"));
        }

        let denial = if cfg.has_api_key() && !api_key_ok {
            DenialClass::Unauthorized
        } else {
            DenialClass::Forbidden
        };

        AccessDecision {
            granted: false,
            reasons,
            denial: Some(denial),
        }
    }
}

/// Browser origins the transport layer should trust, derived from the same
/// configuration the admission check enforces. Not itself an enforcement
/// point.
///
/// No security at all yields the wildcard (reverse-proxy mode). An API key
/// without a host restriction yields nothing: a bearer-token API has no
/// assumed browser-origin use case. Otherwise every non-CIDR entry expands
/// to its `http://` and `https://` forms; CIDR entries cannot be expressed
/// as origins and contribute nothing — those clients are still admitted by
/// [`SecurityPolicy::evaluate`], just not granted browser CORS access.
pub fn cors_origins(config: &SecurityConfig) -> Vec<String> {
    if !config.has_api_key() && !config.has_host_restriction() {
        return vec!["*".to_string()];
    }
    if !config.has_host_restriction() {
        return Vec::new();
    }

    let mut origins = Vec::new();
    for host in &config.allowed_hosts {
        if host.eq_ignore_ascii_case("localhost") {
            origins.push("http://localhost".to_string());
            origins.push("https://localhost".to_string());
        } else if !host.contains('/') {
            origins.push(format!("http://{host}"));
            origins.push(format!("https://{host}"));
        }
    }
    origins
}

/// Key comparison without data-dependent early exit. A length mismatch
/// resolves immediately, which leaks only the key length, never its bytes.
fn constant_time_eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
