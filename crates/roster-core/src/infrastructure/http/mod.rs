//! HTTP transport

pub mod router;

pub use router::{ApiError, AppState, api_router};
