//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing, http, lifecycle produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (dispatch counters and latency)
//!
//! Consumers:
//!     → stdout or log file
//!     → Prometheus scrape (optional)
//! ```
//!
//! # Design Decisions
//! - Request ID appears in every dispatch log line
//! - Metrics exporter disabled by default

pub mod logging;
pub mod metrics;
