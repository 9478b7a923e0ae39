// tests/common/mod.rs
pub use axum::Router;
pub use serde_json::json;
pub use tokio::task::JoinHandle;

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::Json;
use httpmock::Method::POST;
use httpmock::{Mock, MockServer};
use serde_json::Value;
use tokio::sync::Barrier;

use crate::config::settings::ControllerConfig;
use crate::OmadaClient;

pub const TENANT_ID: &str = "my-cid";
pub const CLIENT_ID: &str = "my-client-id";
pub const CLIENT_SECRET: &str = "my-client-secret";
pub const AUTH_HEADER: &str = "AccessToken=my-token";

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

pub fn test_client(base_url: &str) -> OmadaClient {
    let config = ControllerConfig::new(base_url, TENANT_ID, CLIENT_ID, CLIENT_SECRET)
        .with_disable_cert_verification(true);
    OmadaClient::new(config).expect("client")
}

/// Token endpoint that only answers a well formed client credentials request.
pub async fn mock_token_endpoint<'a>(server: &'a MockServer, token: &str) -> Mock<'a> {
    let body = json!({
        "errorCode": 0,
        "msg": "Open API Get Access Token successfully.",
        "result": {
            "accessToken": token,
            "tokenType": "bearer",
            "expiresIn": 7200,
            "refreshToken": "my-refresh"
        }
    });
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/openapi/authorize/token")
                .query_param("grant_type", "client_credentials")
                .query_param("client_id", CLIENT_ID)
                .query_param("client_secret", CLIENT_SECRET)
                .json_body(json!({ "omadacId": TENANT_ID }));
            then.status(200).json_body(body);
        })
        .await
}

pub fn expired_body() -> Value {
    json!({"errorCode": -44112, "msg": "The access token has expired. Please re-initiate the refreshToken process to obtain the access token."})
}

pub fn success_body() -> Value {
    json!({"errorCode": 0, "msg": "Success.", "result": ["Hotel", "Office"]})
}

/// Stateful controller stand-in. Issues `my-token`, `my-token-2`, ... and
/// answers the scenario list with scripted responses, the last one repeating.
#[derive(Clone)]
pub struct ControllerDouble {
    pub token_hits: Arc<AtomicUsize>,
    pub api_hits: Arc<AtomicUsize>,
    pub auth_headers: Arc<Mutex<Vec<String>>>,
    responses: Arc<Vec<(StatusCode, Value)>>,
    token_delay: Duration,
    reject_tokens: bool,
    first_token_barrier: Option<Arc<Barrier>>,
}

impl ControllerDouble {
    pub fn new(responses: Vec<(StatusCode, Value)>) -> Self {
        Self {
            token_hits: Arc::new(AtomicUsize::new(0)),
            api_hits: Arc::new(AtomicUsize::new(0)),
            auth_headers: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(responses),
            token_delay: Duration::ZERO,
            reject_tokens: false,
            first_token_barrier: None,
        }
    }

    pub fn with_token_delay(mut self, delay: Duration) -> Self {
        self.token_delay = delay;
        self
    }

    pub fn rejecting_tokens(mut self) -> Self {
        self.reject_tokens = true;
        self
    }

    /// Answer every request carrying `my-token` with the session expired code.
    /// Those requests are held until `callers` of them have arrived, then all
    /// are answered together.
    pub fn expiring_first_token(mut self, callers: usize) -> Self {
        self.first_token_barrier = Some(Arc::new(Barrier::new(callers)));
        self
    }

    pub fn token_hits(&self) -> usize {
        self.token_hits.load(Ordering::SeqCst)
    }

    pub fn api_hits(&self) -> usize {
        self.api_hits.load(Ordering::SeqCst)
    }

    pub fn auth_headers(&self) -> Vec<String> {
        self.auth_headers.lock().unwrap().clone()
    }

    /// Serve the double and return its base url.
    pub async fn start(&self) -> (JoinHandle<()>, String) {
        let router = Router::new()
            .route("/openapi/authorize/token", post(issue_token))
            .route(&format!("/openapi/v1/{}/scenarios", TENANT_ID), get(scripted_response))
            .with_state(self.clone());
        let (handle, addr) = spawn_axum(router).await;
        (handle, format!("http://{}", addr))
    }
}

async fn issue_token(
    State(double): State<ControllerDouble>,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let n = double.token_hits.fetch_add(1, Ordering::SeqCst) + 1;
    if !double.token_delay.is_zero() {
        tokio::time::sleep(double.token_delay).await;
    }

    let credentials_ok = query.get("client_id").map(String::as_str) == Some(CLIENT_ID)
        && query.get("client_secret").map(String::as_str) == Some(CLIENT_SECRET)
        && body["omadacId"] == TENANT_ID;
    if double.reject_tokens || !credentials_ok {
        return Json(json!({"errorCode": -44106, "msg": "The client id or client secret is invalid."}));
    }

    let token = if n == 1 { "my-token".to_owned() } else { format!("my-token-{}", n) };
    Json(json!({
        "errorCode": 0,
        "msg": "Open API Get Access Token successfully.",
        "result": {"accessToken": token, "tokenType": "bearer", "expiresIn": 7200, "refreshToken": "my-refresh"}
    }))
}

async fn scripted_response(State(double): State<ControllerDouble>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let n = double.api_hits.fetch_add(1, Ordering::SeqCst);
    let header = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    double.auth_headers.lock().unwrap().push(header.clone());

    if let Some(barrier) = &double.first_token_barrier {
        if header == AUTH_HEADER {
            barrier.wait().await;
            return (StatusCode::OK, Json(expired_body()));
        }
    }

    let (status, body) = double
        .responses
        .get(n)
        .or_else(|| double.responses.last())
        .cloned()
        .unwrap_or((StatusCode::OK, success_body()));
    (status, Json(body))
}
