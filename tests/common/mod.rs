#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, Uri, header},
    routing::post,
};
use kraken_forms::infrastructure::http::ReqwestTransport;
use serde_json::Value;
use url::Url;

/// What the stub backend answers for one request.
#[derive(Debug, Clone)]
pub struct StubReply {
    pub status: StatusCode,
    pub body: String,
    pub delay: Duration,
    pub set_cookie: Option<&'static str>,
}

impl StubReply {
    pub fn ok() -> Self {
        Self::status(StatusCode::OK, "")
    }

    pub fn status(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
            set_cookie: None,
        }
    }

    /// Adds a `Set-Cookie` header to the reply.
    pub fn with_cookie(mut self, cookie: &'static str) -> Self {
        self.set_cookie = Some(cookie);
        self
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

type Responder = dyn Fn(&str, &Value) -> StubReply + Send + Sync;

#[derive(Clone)]
struct StubState {
    responder: Arc<Responder>,
    requests: Arc<Mutex<Vec<(String, Value)>>>,
    cookies: Arc<Mutex<Vec<(String, Option<String>)>>>,
}

/// A running stub of the backend API.
pub struct StubBackend {
    pub base_url: Url,
    requests: Arc<Mutex<Vec<(String, Value)>>>,
    cookies: Arc<Mutex<Vec<(String, Option<String>)>>>,
}

impl StubBackend {
    /// Serves the three form endpoints on an ephemeral port, answering each
    /// request with `responder(path, body)`.
    pub async fn start<F>(responder: F) -> Self
    where
        F: Fn(&str, &Value) -> StubReply + Send + Sync + 'static,
    {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let cookies = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            responder: Arc::new(responder),
            requests: requests.clone(),
            cookies: cookies.clone(),
        };

        let app = Router::new()
            .route("/api/v1/login", post(handle))
            .route("/api/v1/passwd", post(handle))
            .route("/api/v1/admin/db_url", post(handle))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: Url::parse(&format!("http://{addr}/")).unwrap(),
            requests,
            cookies,
        }
    }

    /// Answers every request the same way.
    pub async fn always(reply: StubReply) -> Self {
        Self::start(move |_, _| reply.clone()).await
    }

    pub fn transport(&self) -> Arc<ReqwestTransport> {
        Arc::new(ReqwestTransport::new(self.base_url.clone()).unwrap())
    }

    /// Every request received so far as `(path, body)`.
    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }

    /// The `Cookie` header of every request received so far as `(path, cookie)`.
    pub fn cookies(&self) -> Vec<(String, Option<String>)> {
        self.cookies.lock().unwrap().clone()
    }
}

async fn handle(
    State(state): State<StubState>,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, HeaderMap, String) {
    let path = uri.path().to_string();
    let reply = (state.responder)(&path, &body);
    let cookie = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    state.cookies.lock().unwrap().push((path.clone(), cookie));
    state.requests.lock().unwrap().push((path, body));

    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }

    let mut response_headers = HeaderMap::new();
    if let Some(cookie) = reply.set_cookie {
        response_headers.insert(header::SET_COOKIE, HeaderValue::from_static(cookie));
    }
    (reply.status, response_headers, reply.body)
}

/// A transport pointed at a port nobody listens on.
pub async fn unreachable_transport() -> Arc<ReqwestTransport> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let base_url = Url::parse(&format!("http://{addr}/")).unwrap();
    Arc::new(ReqwestTransport::new(base_url).unwrap())
}
