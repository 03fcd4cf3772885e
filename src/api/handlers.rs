use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::Result;
use crate::notification::{
    DispatchOutcome, ReservationRequest, StatusUpdateRequest, WaitlistRequest,
};
use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn reservation_created(
    State(state): State<AppState>,
    Json(request): Json<ReservationRequest>,
) -> Result<Json<Value>> {
    let outcome = state.dispatcher.handle_reservation_created(&request).await?;
    Ok(Json(outcome_body(outcome)))
}

pub async fn waitlist_created(
    State(state): State<AppState>,
    Json(request): Json<WaitlistRequest>,
) -> Result<Json<Value>> {
    let outcome = state.dispatcher.handle_waitlist_created(&request).await?;
    Ok(Json(outcome_body(outcome)))
}

pub async fn status_updated(
    State(state): State<AppState>,
    Json(request): Json<StatusUpdateRequest>,
) -> Result<Json<Value>> {
    let outcome = state.dispatcher.handle_status_updated(&request).await?;
    Ok(Json(outcome_body(outcome)))
}

fn outcome_body(outcome: DispatchOutcome) -> Value {
    match outcome {
        DispatchOutcome::Sent => json!({ "ok": true }),
        DispatchOutcome::Skipped => json!({ "skipped": true }),
    }
}
