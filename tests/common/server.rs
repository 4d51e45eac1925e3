//! Local HTTP server for client tests, built on axum.
//!
//! Every request is recorded; responses come from canned `(method, path)`
//! routes, anything else gets a 404.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::Response;
use url::Url;

/// A request as the server saw it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: Method,
    /// Path exactly as sent, still percent-encoded
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct CannedResponse {
    status: StatusCode,
    content_type: &'static str,
    body: String,
}

#[derive(Default)]
struct ServerState {
    routes: HashMap<(Method, String), CannedResponse>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Routes to serve, collected before the server starts
#[derive(Default)]
pub struct TestServerBuilder {
    routes: HashMap<(Method, String), CannedResponse>,
}

impl TestServerBuilder {
    pub fn json(mut self, method: Method, path: &str, body: serde_json::Value) -> Self {
        self.routes.insert(
            (method, path.to_string()),
            CannedResponse {
                status: StatusCode::OK,
                content_type: "application/json",
                body: body.to_string(),
            },
        );
        self
    }

    pub fn text(mut self, method: Method, path: &str, status: StatusCode, body: &str) -> Self {
        self.routes.insert(
            (method, path.to_string()),
            CannedResponse {
                status,
                content_type: "text/plain; charset=utf-8",
                body: body.to_string(),
            },
        );
        self
    }

    /// Empty-bodied response with `status`
    pub fn status(self, method: Method, path: &str, status: StatusCode) -> Self {
        self.text(method, path, status, "")
    }

    pub async fn start(self) -> TestServer {
        let state = Arc::new(ServerState {
            routes: self.routes,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("test server should bind");
        let addr = listener.local_addr().expect("test server should have an address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("test server should run");
        });

        TestServer {
            base: Url::parse(&format!("http://{addr}")).expect("test server URL should be valid"),
            state,
        }
    }
}

pub struct TestServer {
    pub base: Url,
    state: Arc<ServerState>,
}

impl TestServer {
    pub fn builder() -> TestServerBuilder {
        TestServerBuilder::default()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// The only recorded request; panics if there were zero or several
    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected one request, got {requests:?}");
        requests.into_iter().next().unwrap()
    }
}

async fn handle(
    State(state): State<Arc<ServerState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });

    let canned = state.routes.get(&(method, path)).cloned();
    let (status, content_type, body) = match canned {
        Some(c) => (c.status, c.content_type, c.body),
        None => (StatusCode::NOT_FOUND, "text/plain", "not found".to_string()),
    };

    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap()
}
