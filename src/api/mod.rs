//! API layer - HTTP endpoint handlers and route table.

mod handlers;
mod routes;

pub use handlers::{health, reservation_created, status_updated, waitlist_created};
pub use routes::api_routes;
