//! Router assembly: operational routes at the root, resources under `/api`.

mod common;
mod resource;

pub use common::common_routes;
pub use resource::{api_routes, resource_routes};

use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Maximum accepted request body, in bytes.
pub const BODY_LIMIT: usize = 64 * 1024;

/// Full application router with request tracing and a body size limit.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", api_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(BODY_LIMIT)),
        )
}
