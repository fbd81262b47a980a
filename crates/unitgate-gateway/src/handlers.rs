//! HTTP handlers and error response shaping.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use unitgate_core::action::ServiceAction;
use unitgate_core::error::UnitGateError;

use crate::app_state::AppState;
use crate::gateway::{ControlResponse, ServicesResponse};

/// Error body shape: `{"detail": "..."}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

/// Axum-facing wrapper carrying the HTTP mapping for core errors.
pub struct ApiError(pub UnitGateError);

impl From<UnitGateError> for ApiError {
    fn from(e: UnitGateError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.client_code().http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorBody {
            detail: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// `GET /services` — status of all configured units.
pub async fn list_services(State(state): State<AppState>) -> Json<ServicesResponse> {
    Json(state.gateway().list_services().await)
}

/// `POST /service/{service_name}/{action}` — apply a control action.
pub async fn control_service(
    State(state): State<AppState>,
    Path((service_name, action)): Path<(String, String)>,
) -> Result<Json<ControlResponse>, ApiError> {
    let action: ServiceAction = action.parse()?;
    let response = state.gateway().perform_action(&service_name, action).await?;
    Ok(Json(response))
}
