use crate::errors::{CropGuardError, CropGuardResult};
use crate::transport::{ByteStream, HttpTransport};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A request the mock transport saw, kept for later verification.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

enum QueuedResponse {
    Json(Value),
    Stream(Vec<Bytes>),
    Error(CropGuardError),
}

/// In-memory transport for service tests. Responses are queued in order and
/// every request is recorded.
#[derive(Default)]
pub struct MockHttpTransport {
    responses: Mutex<VecDeque<QueuedResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockHttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_json(&self, value: Value) {
        self.responses
            .lock()
            .unwrap()
            .push_back(QueuedResponse::Json(value));
    }

    pub fn queue_stream(&self, chunks: Vec<Bytes>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(QueuedResponse::Stream(chunks));
    }

    pub fn queue_error(&self, error: CropGuardError) {
        self.responses
            .lock()
            .unwrap()
            .push_back(QueuedResponse::Error(error));
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn recorded_request(&self, index: usize) -> Option<RecordedRequest> {
        self.requests.lock().unwrap().get(index).cloned()
    }

    pub fn verify_request(&self, index: usize, method: Method, path: &str) -> bool {
        self.recorded_request(index)
            .map(|r| r.method == method && r.path == path)
            .unwrap_or(false)
    }

    fn record(&self, method: Method, path: &str, body: Option<Value>) {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            body,
        });
    }

    fn next_response(&self) -> QueuedResponse {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(QueuedResponse::Error(CropGuardError::Unknown(
                "no response queued".to_string(),
            )))
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn request_json(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        _headers: HeaderMap,
    ) -> CropGuardResult<Value> {
        self.record(method, path, body);
        match self.next_response() {
            QueuedResponse::Json(value) => Ok(value),
            QueuedResponse::Error(error) => Err(error),
            QueuedResponse::Stream(_) => Err(CropGuardError::Unknown(
                "stream response queued for json request".to_string(),
            )),
        }
    }

    async fn request_stream(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        _headers: HeaderMap,
    ) -> CropGuardResult<ByteStream> {
        self.record(method, path, body);
        match self.next_response() {
            QueuedResponse::Stream(chunks) => {
                Ok(Box::pin(futures::stream::iter(chunks.into_iter().map(Ok))))
            }
            QueuedResponse::Error(error) => Err(error),
            QueuedResponse::Json(_) => Err(CropGuardError::Unknown(
                "json response queued for stream request".to_string(),
            )),
        }
    }
}
