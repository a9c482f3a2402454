//! Shared fixtures: an in-process recording dispatcher and a mockito server.

#![allow(dead_code)]

use async_trait::async_trait;
use billbee_rs::{
    BillbeeClient, DispatchResponse, Dispatcher, Error, HttpMethod, RequestDescriptor, Result,
};
use mockito::{Server, ServerGuard};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
    pub started: Instant,
    pub finished: Instant,
}

type Responder = Box<dyn Fn(&RequestDescriptor) -> Result<Value> + Send + Sync>;

/// Records every call. Paths can be scripted to fail or to take a while.
pub struct MockDispatcher {
    calls: Mutex<Vec<RecordedCall>>,
    failures: HashMap<String, fn() -> Error>,
    delays: HashMap<String, Duration>,
    default_delay: Duration,
    responder: Option<Responder>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl MockDispatcher {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failures: HashMap::new(),
            delays: HashMap::new(),
            default_delay: Duration::ZERO,
            responder: None,
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn failing(mut self, path: &str, error: fn() -> Error) -> Self {
        self.failures.insert(path.to_string(), error);
        self
    }

    pub fn delay(mut self, path: &str, delay: Duration) -> Self {
        self.delays.insert(path.to_string(), delay);
        self
    }

    pub fn default_delay(mut self, delay: Duration) -> Self {
        self.default_delay = delay;
        self
    }

    pub fn responder(
        mut self,
        f: impl Fn(&RequestDescriptor) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        self.responder = Some(Box::new(f));
        self
    }

    /// Answer every call with `Data: {"path": <request path>}`.
    pub fn echo_path(self) -> Self {
        self.responder(|request| {
            Ok(json!({ "ErrorCode": 0, "ErrorMessage": null, "Data": { "path": request.path() } }))
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.path).collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Dispatcher for MockDispatcher {
    async fn dispatch(&self, request: &RequestDescriptor) -> Result<DispatchResponse> {
        let started = Instant::now();
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        let delay = self
            .delays
            .get(request.path())
            .copied()
            .unwrap_or(self.default_delay);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.calls.lock().unwrap().push(RecordedCall {
            method: request.method(),
            path: request.path().to_string(),
            body: request.body().cloned(),
            started,
            finished: Instant::now(),
        });

        if let Some(error) = self.failures.get(request.path()) {
            return Err(error());
        }
        let body = match &self.responder {
            Some(f) => f(request)?,
            None => json!({ "ErrorCode": 0, "ErrorMessage": null, "Data": null }),
        };
        Ok(DispatchResponse::ok(body))
    }
}

pub fn client_with(mock: MockDispatcher) -> (Arc<MockDispatcher>, BillbeeClient) {
    let mock = Arc::new(mock);
    let client = BillbeeClient::with_dispatcher(mock.clone());
    (mock, client)
}

/// A mockito server plus a client pointed at it.
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

pub const USERNAME: &str = "shop@example.com";
pub const API_PASSWORD: &str = "s3cret";
pub const API_KEY: &str = "test-api-key";

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    pub fn client(&self) -> BillbeeClient {
        BillbeeClient::builder()
            .username(USERNAME)
            .api_password(API_PASSWORD)
            .api_key(API_KEY)
            .base_url(&self.base_url)
            .timeout(Duration::from_secs(5))
            .build()
            .expect("client builds")
    }

    /// `Authorization` header value the transport must send.
    pub fn basic_auth() -> String {
        use base64::Engine as _;
        let token = base64::engine::general_purpose::STANDARD
            .encode(format!("{USERNAME}:{API_PASSWORD}"));
        format!("Basic {token}")
    }
}

pub fn envelope(data: Value) -> String {
    json!({ "ErrorCode": 0, "ErrorMessage": null, "Data": data }).to_string()
}
