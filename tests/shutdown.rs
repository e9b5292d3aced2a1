//! Graceful shutdown tests.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use podscope::config::ServerConfig;

mod common;

#[tokio::test]
async fn test_trigger_drains_and_stops_accepting() {
    let (addr, shutdown, handle) = common::start_server(ServerConfig::default()).await;
    let client = common::wait_ready(addr).await;

    let res = client.get(format!("http://{addr}/")).send().await.unwrap();
    assert_eq!(res.status(), 200);

    shutdown.trigger();

    // The serve task must finish well inside the drain window.
    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not drain in time")
        .unwrap();
    assert!(result.is_ok());

    // Listener is gone: new connections are refused.
    assert!(TcpStream::connect(addr).await.is_err());
}

#[tokio::test]
async fn test_request_in_flight_completes_during_shutdown() {
    let (addr, shutdown, handle) = common::start_server(ServerConfig::default()).await;
    common::wait_ready(addr).await;

    // Raw connection so the request is observably in flight when the
    // shutdown fires.
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /env HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();

    // Let the server accept and start the request before the signal fires.
    tokio::time::sleep(Duration::from_millis(50)).await;
    shutdown.trigger();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    let response = String::from_utf8_lossy(&response);
    assert!(
        response.starts_with("HTTP/1.1 200"),
        "in-flight request should complete: {response}"
    );

    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not drain in time")
        .unwrap();
    assert!(result.is_ok());
}
