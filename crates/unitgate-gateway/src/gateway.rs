//! Thin orchestration over the configured units.
//!
//! Existence checks and response shaping happen here; the actual unit work
//! is delegated to the [`ServiceController`] seam. Holds only read-only
//! state, so one instance serves all requests without locking.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use futures_util::future::join_all;
use serde::Serialize;

use unitgate_core::action::ServiceAction;
use unitgate_core::error::{Result, UnitGateError};

use crate::config::{GatewayConfig, ServiceRecord};
use crate::controller::{ControlOutcome, ServiceController};

/// Reported state of one configured unit.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    pub service: String,
    pub display_name: String,
    pub description: String,
    pub status: String,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Serialize)]
pub struct ServicesResponse {
    pub last_updated: String,
    pub services: Vec<ServiceStatus>,
}

#[derive(Debug, Serialize)]
pub struct ControlResponse {
    pub success: bool,
    pub message: String,
    pub display_name: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub services_count: usize,
}

/// Orchestrates status queries and control actions for the configured
/// units.
pub struct ServiceGateway {
    config: Arc<GatewayConfig>,
    controller: Arc<dyn ServiceController>,
}

impl ServiceGateway {
    pub fn new(config: Arc<GatewayConfig>, controller: Arc<dyn ServiceController>) -> Self {
        Self { config, controller }
    }

    /// Status of every configured unit, queried concurrently. A failing or
    /// slow unit degrades its own row; it never fails or delays the rest.
    pub async fn list_services(&self) -> ServicesResponse {
        let rows = join_all(
            self.config
                .services
                .iter()
                .map(|record| self.status_row(record)),
        )
        .await;

        ServicesResponse {
            last_updated: now_rfc3339(),
            services: rows,
        }
    }

    async fn status_row(&self, record: &ServiceRecord) -> ServiceStatus {
        let (status, enabled) = match self.controller.status(&record.service).await {
            Ok(state) => (state.status, state.enabled),
            Err(e) => {
                tracing::warn!(unit = %record.service, error = %e, "status query failed");
                ("error".to_string(), false)
            }
        };

        ServiceStatus {
            service: record.service.clone(),
            display_name: record.display_name.clone(),
            description: record.description.clone(),
            status,
            enabled,
            metadata: record.metadata.clone(),
        }
    }

    /// Apply an action to a configured unit. Unknown names are rejected
    /// before the backend is consulted; backend failures come back as an
    /// unsuccessful outcome, never as a server error.
    pub async fn perform_action(
        &self,
        service_name: &str,
        action: ServiceAction,
    ) -> Result<ControlResponse> {
        let record = self
            .config
            .find_service(service_name)
            .ok_or_else(|| UnitGateError::NotFound(service_name.to_string()))?;

        let outcome = match self.controller.control(&record.service, action).await {
            Ok(outcome) => outcome,
            Err(e) => ControlOutcome {
                success: false,
                message: e.to_string(),
            },
        };

        Ok(ControlResponse {
            success: outcome.success,
            message: outcome.message,
            display_name: record.display_name.clone(),
        })
    }

    /// Liveness snapshot. Consults neither the security policy nor the
    /// backend.
    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            status: "healthy",
            timestamp: now_rfc3339(),
            services_count: self.config.services.len(),
        }
    }
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
