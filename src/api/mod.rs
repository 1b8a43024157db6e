//! HTTP client for the assistant chat API.

mod client;

pub use client::ChatClient;

use anyhow::Result;

/// Outbound payload produced by the session view when a submit is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outbound {
    /// The trimmed user message.
    pub message: String,
    /// Ask the server to skip the profile interview questions.
    pub skip_profile: bool,
}

/// Seam between the chat session and the transport.
///
/// The session only needs "one message in, one markdown reply out"; tests
/// substitute a scripted backend here.
#[allow(async_fn_in_trait)]
pub trait ChatApi {
    /// Sends one message; resolves to the assistant's markdown reply.
    async fn send(&self, outbound: &Outbound) -> Result<String>;
}
