//! JSON-over-HTTP transport to the conversational backend.
//!
//! Two fixed endpoints: `POST /prime` seeds context before chat opens and
//! `POST /chat` relays one turn. The `Backend` trait is the seam the
//! controllers talk through, so tests can script responses without a server.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::TransportError;

/// Body for `POST /prime`. The response body is ignored by contract.
#[derive(Debug, Clone, Serialize)]
pub struct PrimeRequest {
    pub session_id: String,
    pub goal: String,
    pub timeline: String,
}

/// Body for `POST /chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub session_id: String,
    pub message: String,
}

/// Response from `POST /chat`. Only `reply` is required; `chips` and
/// `escalation` default when the backend omits them.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(default)]
    pub chips: Vec<String>,
    #[serde(default)]
    pub escalation: bool,
}

/// The two backend calls, abstracted for controller tests.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Seed backend context with the wizard's answers. Best-effort; callers
    /// decide whether a failure matters.
    async fn prime(&self, request: &PrimeRequest) -> Result<(), TransportError>;

    /// Relay one chat turn and parse the reply.
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, TransportError>;
}

/// reqwest-backed client for the two fixed endpoints.
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;
        Ok(Self {
            base_url: config.api_base.clone(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// POST `body` as JSON to `path` and parse the JSON response.
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, TransportError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::RequestFailed {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        response
            .json::<R>()
            .await
            .map_err(|e| TransportError::InvalidBody {
                path: path.to_string(),
                reason: e.to_string(),
            })
    }
}

#[async_trait]
impl Backend for ApiClient {
    async fn prime(&self, request: &PrimeRequest) -> Result<(), TransportError> {
        // Send only; the response body (and status) carry no client-visible
        // meaning for priming.
        self.client
            .post(self.endpoint("/prime"))
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::RequestFailed {
                path: "/prime".to_string(),
                reason: e.to_string(),
            })?;
        Ok(())
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, TransportError> {
        self.post("/chat", request).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted backend for controller tests.

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    /// Replays queued `/chat` outcomes in order and records every request.
    #[derive(Default)]
    pub struct ScriptedBackend {
        pub fail_prime: bool,
        replies: Mutex<VecDeque<Result<ChatResponse, TransportError>>>,
        pub primed: Mutex<Vec<PrimeRequest>>,
        pub chatted: Mutex<Vec<ChatRequest>>,
    }

    impl ScriptedBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing_prime() -> Self {
            Self {
                fail_prime: true,
                ..Self::default()
            }
        }

        pub fn push_reply(&self, response: ChatResponse) {
            self.replies.lock().unwrap().push_back(Ok(response));
        }

        pub fn push_failure(&self) {
            self.replies
                .lock()
                .unwrap()
                .push_back(Err(TransportError::RequestFailed {
                    path: "/chat".to_string(),
                    reason: "scripted failure".to_string(),
                }));
        }
    }

    /// Convenience constructor for a plain reply with no chips.
    pub fn reply(text: &str) -> ChatResponse {
        ChatResponse {
            reply: text.to_string(),
            chips: Vec::new(),
            escalation: false,
        }
    }

    #[async_trait]
    impl Backend for ScriptedBackend {
        async fn prime(&self, request: &PrimeRequest) -> Result<(), TransportError> {
            self.primed.lock().unwrap().push(request.clone());
            if self.fail_prime {
                Err(TransportError::RequestFailed {
                    path: "/prime".to_string(),
                    reason: "scripted failure".to_string(),
                })
            } else {
                Ok(())
            }
        }

        async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, TransportError> {
            self.chatted.lock().unwrap().push(request.clone());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(reply("ok")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base: &str) -> ApiClient {
        let config = ClientConfig {
            api_base: base.to_string(),
            request_timeout: None,
        };
        ApiClient::new(&config).unwrap()
    }

    #[test]
    fn endpoint_joins_base_and_path() {
        let client = client_for("http://127.0.0.1:8000");
        assert_eq!(client.endpoint("/chat"), "http://127.0.0.1:8000/chat");
        assert_eq!(client.endpoint("/prime"), "http://127.0.0.1:8000/prime");
    }

    #[test]
    fn chat_response_defaults_optional_fields() {
        let parsed: ChatResponse = serde_json::from_str(r#"{"reply":"hi"}"#).unwrap();
        assert_eq!(parsed.reply, "hi");
        assert!(parsed.chips.is_empty());
        assert!(!parsed.escalation);
    }

    #[test]
    fn chat_response_reads_full_shape() {
        let parsed: ChatResponse = serde_json::from_str(
            r#"{"reply":"hi","chips":["A","B"],"escalation":true}"#,
        )
        .unwrap();
        assert_eq!(parsed.chips, vec!["A", "B"]);
        assert!(parsed.escalation);
    }

    #[test]
    fn chat_response_requires_reply() {
        let parsed = serde_json::from_str::<ChatResponse>(r#"{"chips":["A"]}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn chat_request_serializes_contract_fields() {
        let body = ChatRequest {
            session_id: "s1".to_string(),
            message: "hello".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["session_id"], "s1");
        assert_eq!(json["message"], "hello");
    }

    // No server listening on the target port: both calls must surface a
    // RequestFailed, never panic.

    #[tokio::test]
    async fn chat_network_failure_is_request_failed() {
        let client = client_for("http://127.0.0.1:1");
        let err = client
            .chat(&ChatRequest {
                session_id: "s1".to_string(),
                message: "hello".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::RequestFailed { .. }));
    }

    #[tokio::test]
    async fn prime_network_failure_is_request_failed() {
        let client = client_for("http://127.0.0.1:1");
        let err = client
            .prime(&PrimeRequest {
                session_id: "s1".to_string(),
                goal: "First home".to_string(),
                timeline: "ASAP (0-1 month)".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::RequestFailed { .. }));
    }
}
