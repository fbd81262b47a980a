//! Request admission for protected routes.
//!
//! Runs before the handlers as axum middleware: reads the connection peer
//! address and the bearer token, asks the security policy for a decision,
//! and turns denials into 401/403 responses. The client identity is always
//! the observed peer address, never a forwarded header.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

use unitgate_core::error::UnitGateError;
use unitgate_core::policy::DenialClass;

use crate::app_state::AppState;
use crate::handlers::ApiError;

/// Gate a request on the configured security policy.
pub async fn require_access(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    req: Request,
    next: Next,
) -> Response {
    let client_ip = peer.ip().to_string();
    let bearer = bearer_token(req.headers());

    let decision = state.policy().evaluate(&client_ip, bearer.as_deref());
    if decision.granted {
        return next.run(req).await;
    }

    tracing::warn!(
        client = %client_ip,
        reasons = %decision.reasons.join(", "),
        "access denied"
    );

    let err = match decision.denial {
        Some(DenialClass::Unauthorized) => UnitGateError::Unauthorized {
            reasons: decision.reasons,
        },
        _ => UnitGateError::Forbidden {
            reasons: decision.reasons,
        },
    };
    ApiError(err).into_response()
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}
