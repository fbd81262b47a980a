//! Axum router wiring.
//!
//! `/health` stays open; `/services` and `/service/{name}/{action}` sit
//! behind the admission middleware. The CORS layer is derived from the same
//! security configuration the admission check enforces.

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use unitgate_core::policy::{cors_origins, SecurityConfig};

use crate::{admission, app_state::AppState, handlers, ops};

pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/services", get(handlers::list_services))
        .route("/service/:service_name/:action", post(handlers::control_service))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admission::require_access,
        ));

    Router::new()
        .route("/health", get(ops::health))
        .merge(protected)
        .layer(cors_layer(state.security()))
        .with_state(state)
}

/// CORS layer from the derived origin list. Wildcard only in reverse-proxy
/// mode; credentials only when concrete origins exist (a wildcard origin
/// must not carry credentials).
fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    let origins = cors_origins(security);

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if origins.iter().any(|o| o == "*") {
        layer.allow_origin(Any)
    } else if origins.is_empty() {
        layer
    } else {
        let parsed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        layer.allow_origin(parsed).allow_credentials(true)
    }
}
