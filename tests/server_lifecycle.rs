//! End-to-end checks against a real listener.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use pool_gateway::config::{GatewayConfig, ServerConfig};
use pool_gateway::net::bind;
use pool_gateway::security::ServiceMode;
use pool_gateway::{GatewayServer, Shutdown};

mod common;

use common::CountingEngine;

async fn start_gateway() -> (SocketAddr, GatewayServerHandle) {
    let config = GatewayConfig {
        server: ServerConfig {
            address: "127.0.0.1".into(),
            port: 0,
            ..ServerConfig::default()
        },
        ..GatewayConfig::default()
    };
    let engine = Arc::new(CountingEngine::default());
    let server = GatewayServer::new(Arc::new(config.clone()), engine.clone());
    let mode = server.state().service_mode.clone();

    let listener = bind(&config.server).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let task = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    tokio::time::sleep(Duration::from_millis(100)).await;
    (
        addr,
        GatewayServerHandle {
            shutdown,
            task,
            mode,
            engine,
        },
    )
}

struct GatewayServerHandle {
    shutdown: Shutdown,
    task: tokio::task::JoinHandle<Result<(), std::io::Error>>,
    mode: Arc<pool_gateway::security::ServiceModeCell>,
    engine: Arc<CountingEngine>,
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

#[tokio::test]
async fn test_loopback_operator_suspends_and_resumes() {
    let (addr, handle) = start_gateway().await;
    let client = client();

    let res = client.get(format!("http://{}/voters", addr)).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["access-control-allow-origin"], "*");

    let res = client
        .get(format!("http://{}/service/stop", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(handle.mode.get(), ServiceMode::Suspended);

    let res = client.get(format!("http://{}/voters", addr)).send().await.unwrap();
    assert_eq!(res.status(), 503);
    assert_eq!(res.headers()["access-control-allow-methods"], "GET");

    let res = client
        .get(format!("http://{}/service/start", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(handle.mode.get(), ServiceMode::Active);

    let res = client.get(format!("http://{}/voters", addr)).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(handle.engine.calls(), 2);

    handle.shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), handle.task)
        .await
        .expect("server did not stop")
        .unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_preflight_over_the_wire() {
    let (addr, handle) = start_gateway().await;

    let res = client()
        .request(reqwest::Method::OPTIONS, format!("http://{}/delegate", addr))
        .header("Origin", "https://dashboard.example")
        .header("Access-Control-Request-Method", "GET")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["access-control-max-age"], "86400");
    assert_eq!(res.headers()["access-control-allow-credentials"], "true");
    assert!(res.text().await.unwrap().is_empty());
    assert_eq!(handle.engine.calls(), 0);

    handle.shutdown.trigger();
}
