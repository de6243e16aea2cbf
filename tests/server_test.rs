//! Integration tests for server startup
//!
//! - start_server rejects hosts that are not IP literals
//! - serve answers probes over a real socket and stops through its Handle

use std::time::Duration;

use axum::body::Bytes;
use axum::http::{header, StatusCode};
use axum_server::Handle;
use http_body_util::{BodyExt, Empty};
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use eva::config::AppConfig;
use eva::create_router;
use eva::http::{serve, start_server};
use eva::ServerError;

fn local_config(host: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.http.host = host.to_string();
    config.http.port = 0;
    config
}

#[tokio::test]
async fn test_start_server_rejects_hostname() {
    let config = local_config("localhost");

    let err = start_server(create_router(), &config).await.unwrap_err();
    match err {
        ServerError::Address { host, .. } => assert_eq!(host, "localhost"),
        other => panic!("expected address error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_serves_healthz_over_socket_then_drains() {
    let config = local_config("127.0.0.1");
    let handle = Handle::new();

    let server = tokio::spawn({
        let handle = handle.clone();
        async move { serve(create_router(), &config, handle).await }
    });

    let addr = handle.listening().await.expect("server failed to bind");
    assert_ne!(addr.port(), 0);

    let client = Client::builder(TokioExecutor::new()).build_http::<Empty<Bytes>>();
    let uri = format!("http://{addr}/healthz").parse().unwrap();
    let response = client.get(uri).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"\"ok\"");

    handle.graceful_shutdown(Some(Duration::from_secs(1)));
    let result = tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("server did not stop after graceful shutdown")
        .unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_serves_on_ipv6_loopback() {
    let config = local_config("::1");
    let handle = Handle::new();

    let server = tokio::spawn({
        let handle = handle.clone();
        async move { serve(create_router(), &config, handle).await }
    });

    // Hosts without IPv6 fail to bind; the address itself must still parse
    let Some(addr) = handle.listening().await else {
        let result = server.await.unwrap();
        assert!(matches!(result, Err(ServerError::Serve(_))));
        return;
    };
    assert!(addr.is_ipv6());

    let client = Client::builder(TokioExecutor::new()).build_http::<Empty<Bytes>>();
    let uri = format!("http://{addr}/").parse().unwrap();
    let response = client.get(uri).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    handle.graceful_shutdown(Some(Duration::from_secs(1)));
    assert!(server.await.unwrap().is_ok());
}
