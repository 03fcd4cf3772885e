// Shared infrastructure
pub mod config;
pub mod email;
pub mod error;

// Domain layer (event dispatch + rendering)
pub mod notification;

// Application layer
pub mod api;
pub mod server;
