//! Mock backend server for integration tests
//!
//! One instance can play the gateway (native and compat surfaces) or the
//! direct provider, recording every request so tests can assert on the
//! exact wire shapes the dispatcher produced.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// A request captured by one mock surface
#[derive(Debug, Clone)]
pub struct Captured {
    /// JSON body as received
    pub body: serde_json::Value,
    /// Bearer token from the Authorization header, if any
    pub bearer: Option<String>,
    /// Model taken from the URL path (native surface only)
    pub path_model: Option<String>,
}

#[derive(Default)]
struct SurfaceState {
    requests: Vec<Captured>,
}

struct MockState {
    unauthorized: bool,
    response_override: Option<serde_json::Value>,
    native: Mutex<SurfaceState>,
    compat: Mutex<SurfaceState>,
    provider: Mutex<SurfaceState>,
}

/// Mock backend that records requests and returns canned responses
pub struct MockBackend {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

impl MockBackend {
    /// Start the mock server, returning immediately
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(false, None).await
    }

    /// Start a mock server that answers every request with 401
    pub async fn start_unauthorized() -> anyhow::Result<Self> {
        Self::start_inner(true, None).await
    }

    /// Start a mock server that answers every surface with a fixed body
    pub async fn start_with_response(body: serde_json::Value) -> anyhow::Result<Self> {
        Self::start_inner(false, Some(body)).await
    }

    async fn start_inner(unauthorized: bool, response_override: Option<serde_json::Value>) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            unauthorized,
            response_override,
            native: Mutex::default(),
            compat: Mutex::default(),
            provider: Mutex::default(),
        });

        let app = Router::new()
            .route("/accounts/{account}/ai/run/{*model}", routing::post(handle_native))
            .route(
                "/accounts/{account}/ai/v1/chat/completions",
                routing::post(handle_compat),
            )
            .route("/v1/chat/completions", routing::post(handle_provider))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring this mock as the gateway
    pub fn gateway_base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Base URL for configuring this mock as the direct provider
    ///
    /// Includes `/v1` since the dispatcher appends `/chat/completions`
    pub fn provider_base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Last request seen by the native surface
    pub fn last_native(&self) -> Option<Captured> {
        self.state.native.lock().unwrap().requests.last().cloned()
    }

    /// Last request seen by the gateway compat surface
    pub fn last_compat(&self) -> Option<Captured> {
        self.state.compat.lock().unwrap().requests.last().cloned()
    }

    /// Last request seen by the provider surface
    pub fn last_provider(&self) -> Option<Captured> {
        self.state.provider.lock().unwrap().requests.last().cloned()
    }

    /// Total requests seen across all surfaces
    #[allow(dead_code)]
    pub fn request_count(&self) -> usize {
        [&self.state.native, &self.state.compat, &self.state.provider]
            .iter()
            .map(|surface| surface.lock().unwrap().requests.len())
            .sum()
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

fn bearer_from(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(ToOwned::to_owned)
}

fn canned(surface: &str) -> serde_json::Value {
    serde_json::json!({
        "id": format!("mock-{surface}"),
        "object": "chat.completion",
        "mock_surface": surface,
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": format!("response from {surface}")},
                "finish_reason": "stop",
            }
        ],
    })
}

fn respond(state: &MockState, surface: &str) -> axum::response::Response {
    if state.unauthorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({"error": {"message": "invalid api key"}})),
        )
            .into_response();
    }

    let body = state.response_override.clone().unwrap_or_else(|| canned(surface));
    Json(body).into_response()
}

async fn handle_native(
    State(state): State<Arc<MockState>>,
    Path((_account, model)): Path<(String, String)>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> axum::response::Response {
    state.native.lock().unwrap().requests.push(Captured {
        body,
        bearer: bearer_from(&headers),
        path_model: Some(model),
    });
    respond(&state, "gateway-native")
}

async fn handle_compat(
    State(state): State<Arc<MockState>>,
    Path(_account): Path<String>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> axum::response::Response {
    state.compat.lock().unwrap().requests.push(Captured {
        body,
        bearer: bearer_from(&headers),
        path_model: None,
    });
    respond(&state, "gateway-compat")
}

async fn handle_provider(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> axum::response::Response {
    state.provider.lock().unwrap().requests.push(Captured {
        body,
        bearer: bearer_from(&headers),
        path_model: None,
    });
    respond(&state, "direct-provider")
}
