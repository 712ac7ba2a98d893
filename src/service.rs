//! The encode operation and its logging side effect.
//!
//! # Responsibilities
//! - Resolve the application name for log annotation
//! - Emit the per-request log events
//! - Run the cipher and wrap the result
//!
//! # Design Decisions
//! - The log sink is injected as `Arc<dyn EventLog>` so tests can observe it
//! - Logging can never fail or alter the response

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cipher::rot13;
use crate::config::env::UNKNOWN_APPLICATION;
use crate::config::{get_config, ApplicationConfig};
use crate::observability::logging::APP_LOG_TARGET;
use crate::observability::metrics;

/// Fixed message logged at the start of every encode call.
pub const HEARTBEAT_MESSAGE: &str = "HELLLLOOOOOOO";

/// Query parameters accepted by the encode endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeParams {
    /// Text to transform. Absent means empty.
    pub text: String,
}

impl EncodeParams {
    /// Pick `text` out of decoded query pairs. The first occurrence wins and
    /// unrelated keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let text = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "text").then_some(value))
            .unwrap_or_default();
        Self { text }
    }
}

/// Payload returned by the encode endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeResponse {
    pub data: String,
}

/// Sink for application log events.
///
/// Implementations must not panic and have no way to report failure.
pub trait EventLog: Send + Sync {
    fn info(&self, message: &str);

    /// Log an incoming encode request.
    fn encode_requested(&self, app_name: &str, text: &str) {
        self.info(&format!("[{app_name}] Request to encode text :'{text}'"));
    }
}

/// `EventLog` backed by the global tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventLog;

impl EventLog for TracingEventLog {
    fn info(&self, message: &str) {
        tracing::info!(target: APP_LOG_TARGET, "{message}");
    }

    fn encode_requested(&self, app_name: &str, text: &str) {
        tracing::info!(
            target: APP_LOG_TARGET,
            app_name = %app_name,
            text = %text,
            "[{app_name}] Request to encode text :'{text}'"
        );
    }
}

/// How the application name is obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppName {
    /// Looked up in the environment on every request.
    FromEnv { key: String },
    /// Resolved once and reused.
    Fixed(String),
}

impl AppName {
    /// Build from configuration, resolving immediately when caching is on.
    pub fn from_config(config: &ApplicationConfig) -> Self {
        if config.cache_name {
            AppName::Fixed(get_config(&config.name_env, UNKNOWN_APPLICATION))
        } else {
            AppName::FromEnv {
                key: config.name_env.clone(),
            }
        }
    }

    pub fn resolve(&self) -> String {
        match self {
            AppName::FromEnv { key } => get_config(key, UNKNOWN_APPLICATION),
            AppName::Fixed(name) => name.clone(),
        }
    }
}

/// Stateless ROT13 encoder with request logging.
#[derive(Clone)]
pub struct Rot13Service {
    log: Arc<dyn EventLog>,
    app_name: AppName,
}

impl Rot13Service {
    pub fn new(log: Arc<dyn EventLog>, app_name: AppName) -> Self {
        Self { log, app_name }
    }

    /// Encode `text`, logging the request first.
    pub fn encode(&self, text: &str) -> EncodeResponse {
        let app_name = self.app_name.resolve();

        self.log.info(HEARTBEAT_MESSAGE);
        self.log.encode_requested(&app_name, text);

        let data = rot13(text);
        metrics::record_encoded_chars(data.len());
        EncodeResponse { data }
    }
}

impl std::fmt::Debug for Rot13Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rot13Service")
            .field("app_name", &self.app_name)
            .finish_non_exhaustive()
    }
}
