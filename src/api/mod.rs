//! HTTP boundary: routing, handlers, and error mapping.

mod error;
pub mod handlers;
mod routes;

pub use error::ApiError;
pub use handlers::AppState;
pub use routes::{create_routes, BODY_LIMIT};
