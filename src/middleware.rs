//! Request span middleware.
//!
//! Every request runs inside an `info_span!("request")` carrying a fresh
//! request id and, when Cloud Run's load balancer supplies one, the trace id
//! from `X-Cloud-Trace-Context`. Probe logs can then be joined with the
//! platform's request logs. Nothing is added to the response.

use std::time::Instant;

use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Header set by Google Front End: `TRACE_ID/SPAN_ID;o=OPTIONS`.
pub const CLOUD_TRACE_HEADER: &str = "x-cloud-trace-context";

/// Trace id part of `X-Cloud-Trace-Context`, if present and non-empty.
pub fn cloud_trace_id(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(CLOUD_TRACE_HEADER)?.to_str().ok()?;
    let trace_id = value.split(['/', ';']).next()?.trim();
    (!trace_id.is_empty()).then_some(trace_id)
}

/// Wraps the request in a span and logs its completion with status and duration.
pub async fn request_span_layer(request: Request, next: Next) -> Response {
    let span = tracing::info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %request.method(),
        path = %request.uri().path(),
        trace_id = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );
    if let Some(trace_id) = cloud_trace_id(request.headers()) {
        span.record("trace_id", tracing::field::display(trace_id));
    }

    let start = Instant::now();

    async move {
        let response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::Span::current().record("duration_ms", duration_ms);
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms,
            "Request completed"
        );

        response
    }
    .instrument(span)
    .await
}
