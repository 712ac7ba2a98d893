//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use tokio::net::TcpListener;
use tower::ServiceExt;

use rot13_service::{EventLog, HttpServer, ServiceConfig, Shutdown};

/// Event log that keeps every message for later inspection.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingLog {
    messages: Mutex<Vec<String>>,
}

impl RecordingLog {
    #[allow(dead_code)]
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl EventLog for RecordingLog {
    fn info(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Server wired to a `RecordingLog`.
#[allow(dead_code)]
pub fn recording_server(config: ServiceConfig) -> (HttpServer, Arc<RecordingLog>) {
    let log = Arc::new(RecordingLog::default());
    (HttpServer::with_event_log(config, log.clone()), log)
}

/// Send one request through the router without a socket.
#[allow(dead_code)]
pub async fn send(server: &HttpServer, uri: &str) -> Response<Body> {
    server
        .router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Start a real server on an ephemeral port.
#[allow(dead_code)]
pub async fn start_server(server: HttpServer) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });
    tokio::time::sleep(Duration::from_millis(50)).await;

    (addr, shutdown)
}
