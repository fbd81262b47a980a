//! Shared application state.
//!
//! One immutable snapshot behind an Arc: config, compiled security policy,
//! and the service gateway over the selected backend. Reload means building
//! a new `AppState` and swapping it in whole; concurrent readers see either
//! the old or the new snapshot in full, never a partial mix.

use std::sync::Arc;

use unitgate_core::policy::{SecurityConfig, SecurityPolicy};

use crate::config::GatewayConfig;
use crate::controller::ServiceController;
use crate::gateway::ServiceGateway;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: Arc<GatewayConfig>,
    policy: SecurityPolicy,
    gateway: ServiceGateway,
}

impl AppState {
    pub fn new(cfg: GatewayConfig, controller: Arc<dyn ServiceController>) -> Self {
        let cfg = Arc::new(cfg);
        let policy = SecurityPolicy::new(cfg.security.clone());
        let gateway = ServiceGateway::new(Arc::clone(&cfg), controller);

        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                policy,
                gateway,
            }),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn security(&self) -> &SecurityConfig {
        &self.inner.cfg.security
    }

    pub fn policy(&self) -> &SecurityPolicy {
        &self.inner.policy
    }

    pub fn gateway(&self) -> &ServiceGateway {
        &self.inner.gateway
    }
}
