use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use unitgate_core::error::{Result, UnitGateError};
use unitgate_core::policy::SecurityConfig;

/// One monitored unit, as configured. Read-only after load; the gateway
/// only consults it to validate names and shape responses.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceRecord {
    /// Unit identifier handed to the supervision backend.
    pub service: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

/// Process-wide configuration snapshot. Rebuilt wholesale on reload and
/// replaced atomically behind an Arc, never mutated field-by-field.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub port: u16,
    pub services: Vec<ServiceRecord>,
    pub security: SecurityConfig,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        for record in &self.services {
            if record.service.trim().is_empty() {
                return Err(UnitGateError::ConfigInvalid(
                    "service entries must name a unit".into(),
                ));
            }
        }
        Ok(())
    }

    /// Look up a configured unit by its identifier.
    pub fn find_service(&self, name: &str) -> Option<&ServiceRecord> {
        self.services.iter().find(|r| r.service == name)
    }
}
