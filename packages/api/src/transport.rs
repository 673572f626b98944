//! # Transport: how a request actually leaves the process
//!
//! [`ApiClient`](crate::ApiClient) builds an [`HttpRequest`] and hands it to a
//! [`Transport`]. Two implementations ship with the crate:
//!
//! | Transport | Used by |
//! |-----------|---------|
//! | [`HttpTransport`] | the real frontends; `reqwest` over fetch (wasm32) or hyper (native) |
//! | [`RecordingTransport`] | tests and demos; records every request and answers from a script |
//!
//! A transport only reports whether the exchange completed. Status handling
//! (success vs. [`ApiError::Remote`]) is the client's job.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::Value;

use crate::error::ApiError;

/// HTTP verb used by the content API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully-built outgoing request.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The body parsed as JSON, if there is one.
    pub fn json_body(&self) -> Option<Value> {
        serde_json::from_str(self.body.as_deref()?).ok()
    }
}

/// Status and raw body of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn json(status: u16, value: &Value) -> Self {
        Self::new(status, value.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Async trait for sending one request and waiting for its response.
pub trait Transport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, ApiError>>;
}

/// `reqwest`-backed transport with a per-request timeout.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let client = match reqwest::Client::builder().timeout(timeout).build() {
            Ok(client) => client,
            Err(e) => {
                tracing::warn!(
                    "could not build http client with a {:?} timeout, requests will not time out: {}",
                    timeout,
                    e
                );
                reqwest::Client::new()
            }
        };
        #[cfg(target_arch = "wasm32")]
        let client = reqwest::Client::new();

        Self { client, timeout }
    }

    fn send_error(&self, e: reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::transport(format!("no response after {:?}", self.timeout))
        } else {
            ApiError::transport(e.to_string())
        }
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| self.send_error(e))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.send_error(e))?;
        Ok(HttpResponse { status, body })
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.execute(request).await
        }
        #[cfg(target_arch = "wasm32")]
        {
            with_deadline(self.timeout, self.execute(request)).await
        }
    }
}

/// The fetch backend has no client-level timeout, so race the request
/// against a timer.
#[cfg(target_arch = "wasm32")]
async fn with_deadline<F>(timeout: Duration, request: F) -> Result<HttpResponse, ApiError>
where
    F: std::future::Future<Output = Result<HttpResponse, ApiError>>,
{
    use futures::future::{select, Either};

    let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
    let timer = gloo_timers::future::TimeoutFuture::new(millis);
    futures::pin_mut!(request);
    futures::pin_mut!(timer);

    match select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(ApiError::transport(format!(
            "no response after {:?}",
            timeout
        ))),
    }
}

/// Scripted transport: answers requests in order from a queue and keeps a
/// copy of every request it saw.
///
/// Clones share the queue and the log, so a test can keep a handle while the
/// client owns another.
#[derive(Clone, Debug, Default)]
pub struct RecordingTransport {
    script: Arc<Mutex<VecDeque<Result<HttpResponse, ApiError>>>>,
    seen: Arc<Mutex<Vec<HttpRequest>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response.
    pub fn respond(&self, response: HttpResponse) {
        self.push(Ok(response));
    }

    /// Queue a JSON response with the given status.
    pub fn respond_json(&self, status: u16, value: Value) {
        self.push(Ok(HttpResponse::json(status, &value)));
    }

    /// Queue a failure that never reaches the server.
    pub fn fail(&self, error: ApiError) {
        self.push(Err(error));
    }

    /// Every request sent so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.seen.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Drain the request log.
    pub fn take_requests(&self) -> Vec<HttpRequest> {
        self.seen
            .lock()
            .map(|mut s| std::mem::take(&mut *s))
            .unwrap_or_default()
    }

    /// Number of scripted answers not yet consumed.
    pub fn pending(&self) -> usize {
        self.script.lock().map(|s| s.len()).unwrap_or(0)
    }

    fn push(&self, answer: Result<HttpResponse, ApiError>) {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(answer);
        }
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let label = format!("{} {}", request.method, request.url);
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(request);
        }
        self.script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front())
            .unwrap_or_else(|| Err(ApiError::transport(format!("no scripted answer for {label}"))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn get(url: &str) -> HttpRequest {
        HttpRequest {
            method: Method::Get,
            url: url.to_string(),
            headers: vec![("Auth-Token".to_string(), "abc".to_string())],
            body: None,
        }
    }

    #[test]
    fn test_header_lookup_ignores_case() {
        let request = get("http://x/admin/staff");
        assert_eq!(request.header("auth-token"), Some("abc"));
        assert_eq!(request.header("content-type"), None);
    }

    #[test]
    fn test_success_range() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(302, "").is_success());
        assert!(!HttpResponse::new(401, "").is_success());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn test_silent_server_times_out_as_transport_error() {
        use std::net::TcpListener;
        use std::time::Instant;

        // Accepts the connection and never answers
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            if let Ok((stream, _)) = listener.accept() {
                std::thread::sleep(Duration::from_secs(10));
                drop(stream);
            }
        });

        let transport = HttpTransport::new(Duration::from_millis(300));
        let started = Instant::now();
        let result = transport.send(get(&format!("http://{addr}/public/staff"))).await;

        assert!(started.elapsed() < Duration::from_secs(5));
        match result {
            Err(ApiError::Transport(message)) => assert!(message.contains("no response after")),
            other => panic!("expected a transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_recording_transport_answers_in_order() {
        let transport = RecordingTransport::new();
        transport.respond_json(200, json!([1]));
        transport.fail(ApiError::transport("offline"));

        let first = transport.send(get("http://x/a")).await.unwrap();
        assert_eq!(first.body, "[1]");
        let second = transport.send(get("http://x/b")).await;
        assert_eq!(second, Err(ApiError::transport("offline")));

        // Script exhausted
        let third = transport.send(get("http://x/c")).await;
        assert!(matches!(third, Err(ApiError::Transport(_))));

        let urls: Vec<String> = transport.take_requests().into_iter().map(|r| r.url).collect();
        assert_eq!(urls, vec!["http://x/a", "http://x/b", "http://x/c"]);
        assert!(transport.requests().is_empty());
        assert_eq!(transport.pending(), 0);
    }
}
