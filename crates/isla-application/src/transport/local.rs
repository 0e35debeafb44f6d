use super::ChatTransport;
use crate::chat_service::ChatService;
use async_trait::async_trait;
use isla_core::chat::{ChatRequest, ChatResponse, HANDLER_ERROR_MESSAGE};
use isla_core::error::{IslaError, Result};
use std::sync::Arc;

/// Calls the handler directly, with the same failure surface as the
/// HTTP endpoint.
#[derive(Clone)]
pub struct LocalChatTransport {
    service: Arc<ChatService>,
}

impl LocalChatTransport {
    pub fn new(service: Arc<ChatService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ChatTransport for LocalChatTransport {
    async fn send(&self, request: ChatRequest) -> Result<ChatResponse> {
        self.service.handle(request).await.map_err(|e| {
            tracing::error!(target: "chat", "Chat handler failed: {}", e);
            IslaError::transport(Some(500), HANDLER_ERROR_MESSAGE)
        })
    }

    async fn drain(&self) {
        self.service.drain().await;
    }
}
