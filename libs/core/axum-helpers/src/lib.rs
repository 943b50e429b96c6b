//! # Axum Helpers
//!
//! Utilities shared by the catalog HTTP services.
//!
//! - **[`errors`]**: `AppError` and the `{message}` JSON error body
//! - **[`extractors`]**: `ObjectIdPath` for validated id path parameters
//! - **[`server`]**: router assembly (docs, health, tracing) and serving
//!   with graceful shutdown

pub mod errors;
pub mod extractors;
pub mod health;
pub mod server;
pub mod shutdown;

pub use errors::{AppError, MessageResponse, messages};
pub use extractors::ObjectIdPath;
pub use health::{HealthResponse, health_handler};
pub use server::{create_app, create_router};
pub use shutdown::shutdown_signal;
