//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use podscope::config::ServerConfig;
use podscope::http::HttpServer;
use podscope::lifecycle::Shutdown;

/// Start a server on an ephemeral localhost port.
///
/// Returns the bound address, the shutdown coordinator and the serve task
/// handle. The `bind_address` field of `config` is ignored so parallel tests
/// never collide on a port.
pub async fn start_server(
    config: ServerConfig,
) -> (SocketAddr, Shutdown, JoinHandle<Result<(), std::io::Error>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let serve_rx = shutdown.subscribe();
    let server = HttpServer::new(config);

    let handle = tokio::spawn(async move { server.run(listener, serve_rx).await });

    (addr, shutdown, handle)
}

/// Poll until the server answers requests, with exponential backoff.
///
/// More reliable than a fixed sleep on loaded test machines.
pub async fn wait_ready(addr: SocketAddr) -> reqwest::Client {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let mut delay = Duration::from_millis(10);
    let max_retries = 10;

    for attempt in 1..=max_retries {
        match client
            .get(format!("http://{addr}/"))
            .timeout(Duration::from_millis(250))
            .send()
            .await
        {
            Ok(_) => return client,
            Err(_) if attempt < max_retries => {
                tokio::time::sleep(delay).await;
                delay = std::cmp::min(delay * 2, Duration::from_millis(200));
            }
            Err(e) => panic!("Server not ready after {max_retries} attempts: {e}"),
        }
    }
    client
}
