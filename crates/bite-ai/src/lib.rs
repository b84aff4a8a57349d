//! # bite-ai
//!
//! Minimal client for an Ollama text-generation endpoint.
//!
//! Prompt in, generated text out. The catalog never calls this; it backs
//! the `ask` command only.

mod error;
mod http;

pub use error::AiError;

use std::time::Duration;

use bite_config::OllamaConfig;
use serde::{Deserialize, Serialize};

/// Returned when the service answers without a `response` field.
pub const FALLBACK_RESPONSE: &str = "I couldn't generate a summary at this time.";

// ── Wire types ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub done: bool,
}

impl GenerateResponse {
    /// The generated text, or [`FALLBACK_RESPONSE`] when absent.
    #[must_use]
    pub fn into_text(self) -> String {
        match self.response {
            Some(text) => text,
            None => {
                tracing::warn!("AI service returned an empty response");
                FALLBACK_RESPONSE.to_string()
            }
        }
    }
}

// ── Client ─────────────────────────────────────────────────────────

pub struct OllamaClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
}

impl OllamaClient {
    /// Build a client from the `[ollama]` config section.
    ///
    /// # Errors
    ///
    /// Returns `AiError::Http` if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &OllamaConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .user_agent("bitebot/0.1")
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(AiError::Http)?;
        Ok(Self {
            http,
            endpoint: generate_endpoint(&config.url),
            model: config.model.clone(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one non-streaming generation request.
    ///
    /// # Errors
    ///
    /// `Timeout`, `Http` for transport failures, `Api` for non-2xx
    /// responses, `Parse` for a body that is not JSON.
    pub async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        tracing::info!(model = %self.model, "sending prompt to AI service");
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let result = self.send(&request).await;
        match &result {
            Ok(_) => tracing::info!("received response from AI service"),
            Err(AiError::Timeout) => tracing::error!("AI service request timed out"),
            Err(e) => tracing::error!(endpoint = %self.endpoint, error = %e, "AI service call failed"),
        }
        result
    }

    async fn send(&self, request: &GenerateRequest<'_>) -> Result<String, AiError> {
        let resp = self.http.post(&self.endpoint).json(request).send().await?;
        let resp = crate::http::check_response(resp).await?;
        parse_generate_response(resp).await
    }
}

fn generate_endpoint(base: &str) -> String {
    format!("{}/api/generate", base.trim_end_matches('/'))
}

async fn parse_generate_response(resp: reqwest::Response) -> Result<String, AiError> {
    let body = resp.text().await?;
    let parsed: GenerateResponse =
        serde_json::from_str(&body).map_err(|e| AiError::Parse(e.to_string()))?;
    Ok(parsed.into_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mock_response(body: &'static str) -> reqwest::Response {
        reqwest::Response::from(::http::Response::builder().status(200).body(body).unwrap())
    }

    #[test]
    fn endpoint_is_joined_without_double_slash() {
        assert_eq!(
            generate_endpoint("http://localhost:11434"),
            "http://localhost:11434/api/generate"
        );
        assert_eq!(
            generate_endpoint("http://gpu-box:11434/"),
            "http://gpu-box:11434/api/generate"
        );
    }

    #[test]
    fn request_body_shape() {
        let req = GenerateRequest {
            model: "llama3.1",
            prompt: "Summarize the menu",
            stream: false,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({
                "model": "llama3.1",
                "prompt": "Summarize the menu",
                "stream": false
            })
        );
    }

    #[test]
    fn client_uses_config() {
        let config = OllamaConfig {
            url: "http://ai.internal:8080".into(),
            model: "mistral".into(),
            timeout_secs: 5,
        };
        let client = OllamaClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "http://ai.internal:8080/api/generate");
        assert_eq!(client.model(), "mistral");
    }

    #[tokio::test]
    async fn response_text_is_extracted() {
        let resp = mock_response(r#"{"model":"llama3.1","response":"Try the knafeh.","done":true}"#);
        assert_eq!(
            parse_generate_response(resp).await.unwrap(),
            "Try the knafeh."
        );
    }

    #[tokio::test]
    async fn missing_response_falls_back() {
        let resp = mock_response(r#"{"model":"llama3.1","done":true}"#);
        assert_eq!(
            parse_generate_response(resp).await.unwrap(),
            FALLBACK_RESPONSE
        );
    }

    #[tokio::test]
    async fn invalid_json_is_parse_error() {
        let resp = mock_response("<html>proxy error</html>");
        assert!(matches!(
            parse_generate_response(resp).await,
            Err(AiError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn unreachable_service_is_http_error() {
        let config = OllamaConfig {
            url: "http://127.0.0.1:1".into(),
            model: "llama3.1".into(),
            timeout_secs: 5,
        };
        let client = OllamaClient::new(&config).unwrap();
        let err = client.generate("hello").await.unwrap_err();
        assert!(matches!(err, AiError::Http(_)), "{err}");
    }

    #[tokio::test]
    async fn silent_service_times_out() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        // Accept and hold the socket open without ever answering.
        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(socket);
        });

        let config = OllamaConfig {
            url: format!("http://{addr}"),
            model: "llama3.1".into(),
            timeout_secs: 1,
        };
        let client = OllamaClient::new(&config).unwrap();
        let err = client.generate("hello").await.unwrap_err();
        assert!(matches!(err, AiError::Timeout), "{err}");

        server.abort();
    }
}
