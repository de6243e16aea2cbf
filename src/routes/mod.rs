//! HTTP route handlers.
//!
//! Two read-only routes: `/` with a status payload and `/healthz` for
//! liveness probes. Unmatched paths and methods fall through to axum's
//! default 404 and 405 responses.
//!
//! Every request, matched or not, runs inside the span created by
//! [`request_span_layer`](crate::middleware::request_span_layer).

pub mod health;
pub mod root;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_PROBE;
use crate::middleware::request_span_layer;

/// Creates the Axum router with both routes and their cache headers.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(root::index))
        .route("/healthz", get(health::healthz))
        // Wraps each route's method router, so its 405 carries the header as well;
        // the 404 fallback stays untouched
        .route_layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_PROBE),
        ))
        // Outermost, so unmatched requests get a span and a completion log too
        .layer(middleware::from_fn(request_span_layer))
}
