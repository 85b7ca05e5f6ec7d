//! End-to-end tests for the sample service.
//!
//! Each test binds an ephemeral localhost port, serves the real router over
//! TCP and talks to it with an HTTP client, then shuts the server down
//! gracefully.

use std::net::SocketAddr;

use devops_sample_app::api::{create_router, serve, AppState};
use devops_sample_app::metrics::install_recorder;
use devops_sample_app::Result;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio_test::assert_ok;

/// A running server and the means to stop it.
struct TestServer {
    addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<Result<()>>,
}

impl TestServer {
    async fn start(state: AppState) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(serve(listener, create_router(state), async move {
            rx.await.ok();
        }));

        Self {
            addr,
            shutdown,
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Trigger graceful shutdown and wait for the serve loop to return.
    async fn stop(self) {
        self.shutdown.send(()).unwrap();
        let result = self.handle.await.unwrap();
        assert_ok!(result);
    }
}

#[tokio::test]
async fn test_info_and_health_end_to_end() {
    let server = TestServer::start(AppState::new()).await;
    let client = reqwest::Client::new();

    let response = client.get(server.url("/")).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({"message": "DevOps Sample Application", "version": "1.0.1"})
    );

    let response = client.get(server.url("/health")).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    let uptime = body["uptime"].as_f64().expect("uptime should be a number");
    assert!(uptime >= 0.0);

    server.stop().await;
}

#[tokio::test]
async fn test_concurrent_health_checks() {
    let server = TestServer::start(AppState::new()).await;
    let client = reqwest::Client::new();

    let requests = (0..8).map(|_| {
        let client = client.clone();
        let url = server.url("/health");
        tokio::spawn(async move { client.get(url).send().await.unwrap().status() })
    });

    for request in requests.collect::<Vec<_>>() {
        assert_eq!(request.await.unwrap(), reqwest::StatusCode::OK);
    }

    server.stop().await;
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = TestServer::start(AppState::new()).await;

    let response = reqwest::get(server.url("/does-not-exist")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    server.stop().await;
}

/// The only test in this binary that installs the global recorder.
#[tokio::test]
async fn test_metrics_exposed_after_requests() {
    let handle = install_recorder().unwrap();
    let server = TestServer::start(AppState::new().with_metrics(handle)).await;

    let response = reqwest::get(server.url("/health")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let unknown = ["/a", "/b/c", "/zzz"];
    for path in unknown {
        let response = reqwest::get(server.url(path)).await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    }

    let response = reqwest::get(server.url("/metrics")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let text = response.text().await.unwrap();
    assert!(text.contains("http_requests_total"));
    assert!(text.contains("path=\"/health\""));

    // Unmatched URLs share one series instead of adding a label per path.
    assert!(text.contains("path=\"unmatched\",status=\"404\""));
    for path in unknown {
        assert!(
            !text.contains(&format!("path=\"{}\"", path)),
            "{} leaked into metric labels",
            path
        );
    }

    server.stop().await;
}
