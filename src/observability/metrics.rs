//! Metrics collection and exposition.
//!
//! # Metrics
//! - `routecanal_requests_total` (counter): dispatched requests by route, status
//! - `routecanal_dispatch_duration_seconds` (histogram): time spent in dispatch
//!
//! # Design Decisions
//! - Route label is the pattern source; unmatched requests use `none`
//! - Recording is a no-op until an exporter is installed

use std::net::SocketAddr;
use std::time::Instant;

use axum::http::StatusCode;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus exporter with its own HTTP listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record the outcome of one dispatch.
pub fn record_dispatch(route: &str, status: StatusCode, start: Instant) {
    let route = route.to_string();

    ::metrics::counter!(
        "routecanal_requests_total",
        "route" => route.clone(),
        "status" => status.as_u16().to_string()
    )
    .increment(1);

    ::metrics::histogram!("routecanal_dispatch_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}
