#![allow(dead_code)]

use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use remedios_api::auth::{hash_password, TokenService};
use remedios_api::{app, AppState};

pub const SECRET: &str = "integration-test-secret";
pub const ISSUER: &str = "API Remedios";
pub const ADMIN_LOGIN: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";
/// Lowest bcrypt cost, keeps the suite fast
pub const HASH_COST: u32 = 4;

/// Response captured from an in-process request
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: Value,
}

/// Router over in-memory storage with one known user
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        let tokens = TokenService::new(SECRET, ISSUER, 2).expect("token service");
        let state = AppState::in_memory(tokens);
        state
            .usuarios
            .insert(ADMIN_LOGIN, &hash_password(ADMIN_PASSWORD, HASH_COST).expect("hash password"))
            .await
            .expect("seed admin user");

        Self {
            router: app(state.clone()),
            state,
        }
    }

    pub fn token(&self) -> String {
        self.state.tokens.issue(ADMIN_LOGIN).expect("issue token")
    }

    pub async fn request(&self, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("build request");

        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.expect("router is infallible");

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
        };

        TestResponse { status, location, body }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let token = self.token();
        self.request(Method::GET, uri, Some(&token), None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        let token = self.token();
        self.request(Method::POST, uri, Some(&token), Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Option<Value>) -> TestResponse {
        let token = self.token();
        self.request(Method::PUT, uri, Some(&token), body).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        let token = self.token();
        self.request(Method::DELETE, uri, Some(&token), None).await
    }

    /// Create a medication and return its id
    pub async fn create(&self, body: Value) -> i64 {
        let res = self.post("/remedios", body).await;
        assert_eq!(res.status, StatusCode::CREATED, "create failed: {}", res.body);
        res.body["id"].as_i64().expect("id in create response")
    }
}

pub fn dipirona() -> Value {
    json!({
        "name": "Dipirona",
        "route": "ORAL",
        "batch": "L1",
        "quantity": 10,
        "expiration": "2026-01-01",
        "laboratory": "MEDLEY"
    })
}

/// The real server binary on a free port, backed by in-memory storage
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        let server = Self::spawn()?;
        server.wait_ready(Duration::from_secs(10)).await?;
        Ok(server)
    }

    fn spawn() -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let child = Command::new(env!("CARGO_BIN_EXE_remedios-api"))
            .env("APP_ENV", "development")
            .env("REMEDIOS_HOST", "127.0.0.1")
            .env("REMEDIOS_PORT", port.to_string())
            .env("REMEDIOS_STORAGE", "memory")
            .env("JWT_SECRET", SECRET)
            .env("ADMIN_LOGIN", ADMIN_LOGIN)
            .env("ADMIN_PASSWORD", ADMIN_PASSWORD)
            .env("SECURITY_PASSWORD_HASH_COST", HASH_COST.to_string())
            .env_remove("DATABASE_URL")
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        let url = format!("{}/health", self.base_url);
        while Instant::now() < deadline {
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == reqwest::StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
