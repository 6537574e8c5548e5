//! HTTP API for visit records.
//!
//! `app_router()` returns a `Router` that can be mounted on any axum
//! server instance; `start_server()` runs it on a TCP listener.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::{app_router, register_visit_routes};
pub use server::{start_server, Server, ServerError, ServerSession};
pub use types::VisitController;
