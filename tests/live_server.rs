//! End-to-end tests over a real socket.

use rot13_service::{EncodeResponse, HttpServer, ServiceConfig};

mod common;

#[tokio::test]
async fn test_encode_over_http() {
    let (addr, shutdown) = common::start_server(HttpServer::new(ServiceConfig::default())).await;

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let res = client
        .get(format!("http://{}/v1/encode", addr))
        .query(&[("text", "Why did the chicken cross the road?")])
        .send()
        .await
        .expect("Service unreachable");

    assert_eq!(res.status(), 200);
    let body: EncodeResponse = res.json().await.unwrap();
    assert_eq!(body.data, "julqvqgurpuvpxrapebffgurebnq");

    shutdown.trigger();
}

#[tokio::test]
async fn test_concurrent_requests_do_not_interfere() {
    let (addr, shutdown) = common::start_server(HttpServer::new(ServiceConfig::default())).await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let inputs = ["abc", "nop", "hello", "uryyb", "zzz", "", "Q1W2E3"];
    let mut handles = Vec::new();
    for _ in 0..10 {
        for input in inputs {
            let client = client.clone();
            handles.push(tokio::spawn(async move {
                let body: EncodeResponse = client
                    .get(format!("http://{}/encode", addr))
                    .query(&[("text", input)])
                    .send()
                    .await
                    .unwrap()
                    .json()
                    .await
                    .unwrap();
                (input, body.data)
            }));
        }
    }

    for handle in handles {
        let (input, data) = handle.await.unwrap();
        assert_eq!(data, rot13_service::cipher::rot13(input));
    }

    shutdown.trigger();
}

#[tokio::test]
async fn test_server_stops_on_shutdown() {
    let (addr, shutdown) = common::start_server(HttpServer::new(ServiceConfig::default())).await;

    shutdown.trigger();
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;

    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap();
    assert!(client
        .get(format!("http://{}/v1/encode?text=a", addr))
        .send()
        .await
        .is_err());
}
