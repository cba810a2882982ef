//! Web layer for the transit router.
//!
//! Provides JSON endpoints for route queries and network metadata.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
