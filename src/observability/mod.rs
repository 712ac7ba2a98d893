//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request handlers and the encode service produce:
//!     → logging.rs (structured log events, one shared subscriber)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Application events and HTTP server events go through the same subscriber
//! - Request ID flows into the trace span of every request
//! - Metric updates are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
