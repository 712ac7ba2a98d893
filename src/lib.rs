//! ROT13 encoding service library.

pub mod cipher;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod service;

pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use service::{EncodeResponse, EventLog, Rot13Service};
