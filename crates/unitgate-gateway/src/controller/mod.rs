//! Supervision backend seam.
//!
//! The gateway never talks to systemd directly; everything goes through the
//! [`ServiceController`] trait so the backend is swappable at startup and
//! mockable in tests. Two variants exist: the real `systemctl` subprocess
//! backend and a degraded stand-in selected when no supervisor is reachable.

pub mod systemctl;

use std::sync::Arc;

use async_trait::async_trait;

use unitgate_core::action::ServiceAction;
use unitgate_core::error::{Result, UnitGateError};

/// Run/enablement state of one unit as reported by the backend.
#[derive(Debug, Clone)]
pub struct UnitState {
    pub status: String,
    pub enabled: bool,
}

/// Outcome of a control action, relayed verbatim to the caller.
#[derive(Debug, Clone)]
pub struct ControlOutcome {
    pub success: bool,
    pub message: String,
}

/// Capability to query and control named units. Every call is bounded by a
/// timeout inside the implementation; a timeout is a per-unit outcome, not
/// a process-wide fault.
#[async_trait]
pub trait ServiceController: Send + Sync {
    /// Query run state and enablement of a unit.
    async fn status(&self, unit: &str) -> Result<UnitState>;

    /// Apply a control action to a unit.
    async fn control(&self, unit: &str, action: ServiceAction) -> Result<ControlOutcome>;
}

/// Pick the controller implementation for this host.
pub async fn select_controller() -> Arc<dyn ServiceController> {
    if systemctl::SystemctlController::available().await {
        Arc::new(systemctl::SystemctlController::new())
    } else {
        tracing::warn!("systemctl not found; unit queries will report the backend unavailable");
        Arc::new(UnavailableController)
    }
}

/// Stand-in backend for hosts without a reachable supervisor. Reads degrade
/// per unit and actions fail with a message; the process stays up.
pub struct UnavailableController;

#[async_trait]
impl ServiceController for UnavailableController {
    async fn status(&self, _unit: &str) -> Result<UnitState> {
        Err(UnitGateError::Backend("supervision backend unavailable".into()))
    }

    async fn control(&self, _unit: &str, _action: ServiceAction) -> Result<ControlOutcome> {
        Err(UnitGateError::Backend("supervision backend unavailable".into()))
    }
}
