use crate::error::{ChatError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Body POSTed to the chat endpoint. Built fresh for every send and
/// discarded once the request completes.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub query: String,
    pub language: String,
    pub return_sources: bool,
}

impl ChatRequest {
    pub fn new(query: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            language: language.into(),
            return_sources: false,
        }
    }
}

/// Body expected back from the chat endpoint. `answer` may be absent.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub answer: Option<String>,
}

/// HTTP client for the backend chat endpoint.
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: Client,
    endpoint: String,
}

impl ChatClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Sends one question to the backend. `Ok(None)` means the server
    /// answered 2xx but the body carried no usable `answer` field.
    pub async fn ask(&self, request: &ChatRequest) -> Result<Option<String>> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Http { status });
        }

        let body: ChatResponse = response.json().await?;
        Ok(body.answer.filter(|answer| !answer.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn server_with(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(template)
            .mount(&server)
            .await;
        server
    }

    fn client_for(server: &MockServer) -> ChatClient {
        ChatClient::new(format!("{}/chat", server.uri()))
    }

    #[tokio::test]
    async fn ask_returns_answer_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "query": "What is the capital of France?",
                "language": "English",
                "return_sources": false,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "Paris"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let request = ChatRequest::new("What is the capital of France?", "English");
        let answer = client.ask(&request).await.unwrap();
        assert_eq!(answer.as_deref(), Some("Paris"));
    }

    #[tokio::test]
    async fn ask_treats_missing_answer_as_none() {
        let server = server_with(ResponseTemplate::new(200).set_body_json(json!({}))).await;
        let client = client_for(&server);
        let answer = client.ask(&ChatRequest::new("hello", "English")).await.unwrap();
        assert_eq!(answer, None);
    }

    #[tokio::test]
    async fn ask_treats_empty_answer_as_none() {
        let server =
            server_with(ResponseTemplate::new(200).set_body_json(json!({"answer": ""}))).await;
        let client = client_for(&server);
        let answer = client.ask(&ChatRequest::new("hello", "English")).await.unwrap();
        assert_eq!(answer, None);
    }

    #[tokio::test]
    async fn ask_fails_on_server_error() {
        let server = server_with(ResponseTemplate::new(500)).await;
        let client = client_for(&server);
        let result = client.ask(&ChatRequest::new("hello", "English")).await;
        match result {
            Err(ChatError::Http { status }) => assert_eq!(status.as_u16(), 500),
            other => panic!("expected HTTP error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn ask_fails_when_server_is_unreachable() {
        // Discard port; nothing listens there.
        let client = ChatClient::new("http://127.0.0.1:9/chat");
        let result = client.ask(&ChatRequest::new("hello", "English")).await;
        assert!(matches!(result, Err(ChatError::Transport(_))));
    }
}
