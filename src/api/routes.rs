use axum::{
    routing::{get, post},
    Router,
};

use crate::server::AppState;

use super::handlers::{health, reservation_created, status_updated, waitlist_created};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health
        .route("/health", get(health))
        // Notification endpoints
        .nest(
            "/email",
            Router::new()
                .route("/reservation-created", post(reservation_created))
                .route("/waitlist-created", post(waitlist_created))
                .route("/status-updated", post(status_updated)),
        )
}
