use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{ChatApi, Outbound};

/// Request body for `POST /api/chat`.
///
/// `skipProfile` is only ever sent as `true`; when absent the server runs
/// the profile interview as usual.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    #[serde(rename = "skipProfile", skip_serializing_if = "Option::is_none")]
    skip_profile: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    content: String,
}

/// HTTP client for the assistant endpoint.
///
/// Carries a cookie jar across requests within the session, matching the
/// website widget which talks to the API with credentials included.
pub struct ChatClient {
    client: Client,
    endpoint: String,
}

impl ChatClient {
    /// Creates a client for the given API origin (e.g. `http://localhost:5000`).
    pub fn new(endpoint: String) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, endpoint })
    }

    fn url(&self) -> String {
        format!("{}/api/chat", self.endpoint.trim_end_matches('/'))
    }
}

impl ChatApi for ChatClient {
    async fn send(&self, outbound: &Outbound) -> Result<String> {
        let url = self.url();
        let request = ChatRequest {
            message: &outbound.message,
            skip_profile: outbound.skip_profile.then_some(true),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .with_context(|| format!("Failed to reach chat endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Chat request failed with status {status}: {body}");
        }

        let reply: ChatResponse = response
            .json()
            .await
            .context("Malformed chat response body")?;

        Ok(reply.content)
    }
}
