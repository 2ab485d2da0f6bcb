use crate::{
    errors::{ChatError, ChatResult},
    logging::{log_api_call, ApiCallLog},
    models::{ChatRequest, ChatResponse},
};
use reqwest::Client;
use std::time::Instant;

/// Default chat endpoint.
pub const DEFAULT_CHAT_URL: &str = "http://127.0.0.1:5000/chat";

/// Thin wrapper over the chat endpoint. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ChatApi {
    client: Client,
    endpoint: String,
}

impl ChatApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts one message and returns the `response` field of the reply.
    ///
    /// No timeout and no retry: a hung server keeps this future pending.
    pub async fn send(&self, request: &ChatRequest) -> ChatResult<String> {
        let started = Instant::now();
        let mut response_status = None;
        let result = self.post(request, &mut response_status).await;

        log_api_call(&ApiCallLog {
            endpoint: self.endpoint.clone(),
            request_summary: request.summary(),
            response_status,
            response_time_ms: started.elapsed().as_millis(),
            error: result.as_ref().err().map(ToString::to_string),
        });

        result
    }

    async fn post(&self, request: &ChatRequest, status_out: &mut Option<u16>) -> ChatResult<String> {
        // `.json()` sets Content-Type: application/json
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ChatError::network_failure(describe_transport_error(&e)))?;

        let status = response.status();
        *status_out = Some(status.as_u16());
        if !status.is_success() {
            return Err(ChatError::ServerError(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ChatError::network_failure(describe_transport_error(&e)))?;

        let data: ChatResponse = serde_json::from_slice(&body)
            .map_err(|e| ChatError::malformed_response(e.to_string()))?;

        Ok(data.response)
    }
}

fn describe_transport_error(err: &reqwest::Error) -> String {
    if err.is_connect() {
        format!("could not connect: {}", err)
    } else if err.is_timeout() {
        format!("request timed out: {}", err)
    } else {
        err.to_string()
    }
}
