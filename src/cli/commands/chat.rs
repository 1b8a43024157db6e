use anyhow::Result;

use crate::api::ChatClient;
use crate::chat::{ChatSession, SessionConfig};
use crate::config::{ConfigManager, resolve_endpoint};
use crate::flags::ProfileFlag;
use crate::layout;
use crate::output;
use crate::render::MarkdownRenderer;

pub struct ChatOptions {
    pub endpoint: Option<String>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default();
    let endpoint = resolve_endpoint(options.endpoint.as_deref(), &file_config);

    let client = ChatClient::new(endpoint.clone())?;
    let flag = ProfileFlag::new();
    let renderer = if output::is_no_color() {
        MarkdownRenderer::plain()
    } else {
        MarkdownRenderer::new(layout::detect_background())
    };

    let mut session = ChatSession::new(SessionConfig::new(endpoint), client, flag, renderer);
    session.run().await
}
