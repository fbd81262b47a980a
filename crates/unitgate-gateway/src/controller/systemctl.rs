//! `systemctl` subprocess backend.
//!
//! Status queries run `systemctl is-active` / `is-enabled`; control actions
//! run the verb directly. `is-active` exits non-zero for inactive units but
//! still names the state on stdout, so only spawn failures surface as
//! errors — exit codes are not consulted for status.

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::{timeout, Duration};

use unitgate_core::action::ServiceAction;
use unitgate_core::error::{Result, UnitGateError};

use super::{ControlOutcome, ServiceController, UnitState};

/// Status queries stay short; control actions may wait on unit job queues.
const STATUS_TIMEOUT: Duration = Duration::from_secs(5);
const CONTROL_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Default)]
pub struct SystemctlController;

impl SystemctlController {
    pub fn new() -> Self {
        Self
    }

    /// Probe for a usable `systemctl` binary.
    pub async fn available() -> bool {
        matches!(
            Command::new("systemctl").arg("--version").output().await,
            Ok(out) if out.status.success()
        )
    }
}

/// Run one status query. `Ok(None)` means the call timed out.
async fn query(args: &[&str]) -> Result<Option<String>> {
    let run = Command::new("systemctl").args(args).output();
    match timeout(STATUS_TIMEOUT, run).await {
        Err(_) => Ok(None),
        Ok(out) => {
            let out = out
                .map_err(|e| UnitGateError::Backend(format!("systemctl failed to run: {e}")))?;
            Ok(Some(String::from_utf8_lossy(&out.stdout).trim().to_string()))
        }
    }
}

#[async_trait]
impl ServiceController for SystemctlController {
    async fn status(&self, unit: &str) -> Result<UnitState> {
        let Some(active) = query(&["is-active", unit]).await? else {
            return Ok(UnitState {
                status: "unknown".into(),
                enabled: false,
            });
        };
        let Some(enabled) = query(&["is-enabled", unit]).await? else {
            return Ok(UnitState {
                status: "unknown".into(),
                enabled: false,
            });
        };

        Ok(UnitState {
            status: if active.is_empty() { "unknown".into() } else { active },
            enabled: enabled == "enabled",
        })
    }

    async fn control(&self, unit: &str, action: ServiceAction) -> Result<ControlOutcome> {
        let run = Command::new("systemctl").arg(action.as_str()).arg(unit).output();
        let out = match timeout(CONTROL_TIMEOUT, run).await {
            Err(_) => {
                return Ok(ControlOutcome {
                    success: false,
                    message: "Command timed out".into(),
                })
            }
            Ok(res) => res
                .map_err(|e| UnitGateError::Backend(format!("systemctl failed to run: {e}")))?,
        };

        if out.status.success() {
            tracing::info!(unit, action = action.as_str(), "unit control applied");
            Ok(ControlOutcome {
                success: true,
                message: format!("Service {action} successful"),
            })
        } else {
            let stderr = String::from_utf8_lossy(&out.stderr);
            tracing::error!(unit, action = action.as_str(), error = %stderr.trim(), "unit control failed");
            Ok(ControlOutcome {
                success: false,
                message: format!("Service {action} failed: {}", stderr.trim()),
            })
        }
    }
}
