//! Metrics collection and exposition.
//!
//! # Metrics
//! - `rot13_requests_total` (counter): requests by route, status
//! - `rot13_request_duration_seconds` (histogram): time spent inside the
//!   middleware stack below `track_requests`, handler included
//! - `rot13_encoded_chars_total` (counter): letters emitted by the cipher

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Route label for requests that matched no route.
pub const FALLBACK_ROUTE: &str = "fallback";

/// Install the Prometheus recorder and its scrape listener on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record a completed request.
pub fn record_request(route: String, status: u16, start: Instant) {
    counter!("rot13_requests_total", "route" => route.clone(), "status" => status.to_string())
        .increment(1);
    histogram!("rot13_request_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}

/// Record how many letters an encode call produced.
pub fn record_encoded_chars(count: usize) {
    counter!("rot13_encoded_chars_total").increment(count as u64);
}

/// Route template for labelling; unknown paths share one label.
pub fn route_label(request: &Request) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| FALLBACK_ROUTE.to_owned())
}

/// Middleware timing each request and counting it by route and status.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let route = route_label(&request);

    let response = next.run(request).await;

    record_request(route, response.status().as_u16(), start);
    response
}
