//! HTTP routes.
//!
//! | Route | Query | Body |
//! |---|---|---|
//! | `GET /checkAvailability/:id` | `day`, `hr`, `min` | `{"response": bool}` |
//! | `GET /getWashroomTimes/:id` | | `{"response": {day: [{start, end}]}}` |
//! | `GET /checkAvailabilitydemo` | | `{"response": {day: [{start, end}]}}` |
//! | `GET /health` | | `{"status": "ok" \| "degraded"}` |

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use hours_engine::{
    check_availability, demo_week, get_times, FormattedWeek, HoursStore, MissingEntityPolicy,
    WashroomId,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::error::{Result, ServerError};

/// Shared request state. The store handle is injected at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn HoursStore>,
    pub missing_entity: MissingEntityPolicy,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("missing_entity", &self.missing_entity)
            .finish_non_exhaustive()
    }
}

/// Every successful body wraps its payload in `response`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub response: T,
}

/// Query string of `/checkAvailability/:id`.
#[derive(Debug, Deserialize)]
pub struct AvailabilityParams {
    pub day: i64,
    pub hr: i64,
    pub min: i64,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/checkAvailability/:id", get(check_availability_handler))
        .route("/getWashroomTimes/:id", get(washroom_times_handler))
        .route("/checkAvailabilitydemo", get(demo_handler))
        .route("/checkAvailabilitydemo/", get(demo_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn check_availability_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    params: std::result::Result<Query<AvailabilityParams>, QueryRejection>,
) -> Result<Json<ApiResponse<bool>>> {
    let Query(params) = params.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    let id = WashroomId::new(id)?;
    let open = check_availability(
        state.store.as_ref(),
        &id,
        params.day,
        params.hr,
        params.min,
        state.missing_entity,
    )
    .await?;
    Ok(Json(ApiResponse { response: open }))
}

async fn washroom_times_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<FormattedWeek>>> {
    let id = WashroomId::new(id)?;
    let week = get_times(state.store.as_ref(), &id, state.missing_entity).await?;
    Ok(Json(ApiResponse { response: week }))
}

async fn demo_handler() -> Json<ApiResponse<FormattedWeek>> {
    Json(ApiResponse {
        response: demo_week(),
    })
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.health_check().await {
        Ok(true) => (StatusCode::OK, Json(json!({ "status": "ok" }))),
        Ok(false) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "degraded" })),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "degraded" })),
            )
        }
    }
}
