//! Common test utilities

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use seranking::{Client, ClientConfig, HttpRequest, HttpResponse, Transport, TransportError};

pub const TOKEN: &str = "test-token-123";
pub const BASE_URL: &str = "https://api4.seranking.com";

/// Canned outcome for one request
#[derive(Debug)]
pub enum Reply {
    Response(HttpResponse),
    ConnectionRefused,
}

#[derive(Debug, Default)]
struct State {
    requests: Vec<HttpRequest>,
    replies: VecDeque<Reply>,
}

/// Transport that records every request and plays back queued replies
///
/// With nothing queued it answers `200 {}`.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    state: Arc<Mutex<State>>,
}

impl RecordingTransport {
    pub fn reply_json(&self, status: u16, body: &str) {
        self.push(Reply::Response(HttpResponse::new(status, body)));
    }

    pub fn fail_connection(&self) {
        self.push(Reply::ConnectionRefused);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    /// The single request sent so far
    pub fn only_request(&self) -> HttpRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }

    fn push(&self, reply: Reply) {
        self.state.lock().unwrap().replies.push_back(reply);
    }
}

impl Transport for RecordingTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request.clone());
        match state.replies.pop_front() {
            Some(Reply::Response(response)) => Ok(response),
            Some(Reply::ConnectionRefused) => Err(TransportError::Io(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))),
            None => Ok(HttpResponse::new(200, "{}")),
        }
    }
}

/// Test context holding a client wired to a recording transport
pub struct TestContext {
    pub client: Client<RecordingTransport>,
    pub transport: RecordingTransport,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new(BASE_URL))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let transport = RecordingTransport::default();
        let client = Client::with_transport(TOKEN, config, transport.clone())
            .expect("Failed to create test client");
        TestContext { client, transport }
    }

    /// Path and query of the single recorded request, base URL stripped
    pub fn sent_path(&self) -> String {
        let url = self.transport.only_request().url;
        url.strip_prefix(&format!("{}/", BASE_URL))
            .expect("request did not target the base URL")
            .to_string()
    }

    /// JSON body of the single recorded request
    pub fn sent_json(&self) -> serde_json::Value {
        let body = self
            .transport
            .only_request()
            .body
            .expect("request had no body");
        serde_json::from_str(&body).expect("request body is not JSON")
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
