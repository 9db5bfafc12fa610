//! OpenAI-compatible text generator

use super::types::{ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;
use outreach_application::{GenerationError, TextGenerator};
use outreach_domain::GenerationRequest;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, warn};

/// Calls `POST {base_url}/chat/completions` with a bearer key
pub struct OpenAiTextGenerator {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiTextGenerator {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerationError::NotConfigured(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Map a non-2xx status and its body to an error
    fn status_error(status: StatusCode, body: &str) -> GenerationError {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .map(|parsed| parsed.error.message)
            .unwrap_or_else(|_| body.trim().to_string());

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                GenerationError::Unauthorized(message)
            }
            StatusCode::TOO_MANY_REQUESTS => GenerationError::RateLimited(message),
            _ => GenerationError::RequestFailed {
                status: status.as_u16(),
                message,
            },
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiTextGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let body = ChatCompletionRequest {
            model: &request.model,
            messages: &request.messages,
            max_tokens: request.max_tokens,
            n: 1,
            temperature: request.temperature,
        };

        debug!(
            "chat completion: model {}, {} message(s)",
            request.model,
            request.messages.len()
        );

        let response = self
            .http_client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Chat completion request failed");
                if e.is_timeout() {
                    GenerationError::Timeout
                } else {
                    GenerationError::ConnectionError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Chat completion API error");
            return Err(Self::status_error(status, &error_text));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(GenerationError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{StubServer, http_response};
    use outreach_domain::Message;

    fn request() -> GenerationRequest {
        GenerationRequest::new("gpt-3.5-turbo", 100, 0.7)
            .message(Message::user("Pick one"))
            .message(Message::assistant("Dear Foo"))
    }

    fn generator(server: &StubServer) -> OpenAiTextGenerator {
        OpenAiTextGenerator::new("sk-test", server.url("/v1/"), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_generate_returns_first_choice() {
        let server = StubServer::start(vec![http_response(
            200,
            "application/json",
            r#"{"choices":[{"message":{"role":"assistant","content":"a@foo.com"}},{"message":{"content":"b@foo.com"}}]}"#,
        )])
        .await;

        let reply = generator(&server).generate(&request()).await.unwrap();

        assert_eq!(reply, "a@foo.com");

        let raw = &server.requests()[0];
        assert!(raw.starts_with("POST /v1/chat/completions HTTP/1.1"));
        assert!(raw.to_lowercase().contains("authorization: bearer sk-test"));

        let body = &raw[raw.find("\r\n\r\n").unwrap() + 4..];
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["n"], 1);
        assert_eq!(json["max_tokens"], 100);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][1]["role"], "assistant");
        assert_eq!(json["messages"][1]["content"], "Dear Foo");
    }

    #[tokio::test]
    async fn test_generate_unauthorized() {
        let server = StubServer::start(vec![http_response(
            401,
            "application/json",
            r#"{"error":{"message":"Incorrect API key provided"}}"#,
        )])
        .await;

        let result = generator(&server).generate(&request()).await;

        assert_eq!(
            result,
            Err(GenerationError::Unauthorized(
                "Incorrect API key provided".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_generate_rate_limited() {
        let server =
            StubServer::start(vec![http_response(429, "text/plain", "slow down")]).await;

        let result = generator(&server).generate(&request()).await;

        assert_eq!(
            result,
            Err(GenerationError::RateLimited("slow down".to_string()))
        );
    }

    #[tokio::test]
    async fn test_generate_server_error() {
        let server = StubServer::start(vec![http_response(500, "text/plain", "boom")]).await;

        let result = generator(&server).generate(&request()).await;

        assert_eq!(
            result,
            Err(GenerationError::RequestFailed {
                status: 500,
                message: "boom".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_generate_without_choices_is_empty_response() {
        let server =
            StubServer::start(vec![http_response(200, "application/json", r#"{"choices":[]}"#)])
                .await;

        let result = generator(&server).generate(&request()).await;

        assert_eq!(result, Err(GenerationError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_generate_malformed_body() {
        let server =
            StubServer::start(vec![http_response(200, "application/json", "not json")]).await;

        let result = generator(&server).generate(&request()).await;

        assert!(matches!(result, Err(GenerationError::InvalidResponse(_))));
    }
}
