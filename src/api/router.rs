//! HTTP router.
//!
//! Visit routes are registered as a group under `/visits`. Collection
//! routes end in a trailing slash and are matched exactly: `/visits`
//! without the slash is not routed.
//!
//! Layer stack (outermost → innermost):
//! 1. Access log → 2. `Cache-Control: no-store` → 3. Handler

use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::VisitController;

/// Path prefix of the visit route group.
pub const VISITS_GROUP: &str = "/visits";

/// Register the five visit endpoints on `router`.
///
/// NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
pub fn register_visit_routes(router: Router, controller: VisitController) -> Router {
    let visits = Router::new()
        .route(
            &format!("{VISITS_GROUP}/"),
            get(endpoints::visits::list)
                .post(endpoints::visits::create)
                .put(endpoints::visits::update),
        )
        .route(
            &format!("{VISITS_GROUP}/:id"),
            get(endpoints::visits::get).delete(endpoints::visits::delete),
        )
        .with_state(controller);

    router.merge(visits)
}

/// Build the full application router: health check, visit routes, and
/// the shared layer stack.
pub fn app_router(controller: VisitController) -> Router {
    let base = Router::new().route("/health", get(endpoints::health::check));

    register_visit_routes(base, controller)
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(axum::middleware::from_fn(middleware::access_log::log_access))
}
