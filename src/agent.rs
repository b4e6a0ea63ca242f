use crate::cli::Args;
use crate::config::prompt::SYSTEM_PROMPT;
use crate::llm::LlmConfig;
use crate::llm::chat::{ ChatClient, new_client as new_chat_client };
use crate::models::chat::{ ChatRole, ChatTurn };

use log::info;
use std::env;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

/// Only the most recent turns of the incoming history are forwarded upstream.
const HISTORY_WINDOW: usize = 5;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("{0}")]
    Configuration(String),

    #[error("invalid conversation turn: {0}")]
    Validation(String),

    #[error("completion provider error: {0}")]
    Upstream(String),
}

/// Builds the turn list for one request: the fixed system turn, the tail of
/// the incoming history, then the new user message.
///
/// History turns whose role is outside the known set are rejected rather
/// than forwarded to the provider.
pub fn assemble_prompt(
    message: &str,
    history: &[ChatTurn]
) -> Result<Vec<ChatTurn>, ChatError> {
    for turn in history {
        turn.role
            .parse::<ChatRole>()
            .map_err(|e| ChatError::Validation(e.to_string()))?;
    }

    let tail = if history.len() > HISTORY_WINDOW {
        &history[history.len() - HISTORY_WINDOW..]
    } else {
        history
    };

    let mut messages = Vec::with_capacity(tail.len() + 2);
    messages.push(ChatTurn::new("system", SYSTEM_PROMPT));
    messages.extend_from_slice(tail);
    messages.push(ChatTurn::new("user", message));
    Ok(messages)
}

pub struct ChatAgent {
    chat_client: RwLock<Option<Arc<dyn ChatClient>>>,
    chat_base_url: Option<String>,
}

impl ChatAgent {
    pub fn new(args: &Args) -> Self {
        Self {
            chat_client: RwLock::new(None),
            chat_base_url: args.chat_base_url.clone(),
        }
    }

    fn build_client(&self) -> Result<Arc<dyn ChatClient>, ChatError> {
        let api_key = env
            ::var("GROQ_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                ChatError::Configuration(
                    "GROQ_API_KEY not found in environment variables".to_string()
                )
            })?;

        let config = LlmConfig {
            api_key: Some(api_key),
            completion_model: None,
            base_url: self.chat_base_url.clone(),
        };
        new_chat_client(&config).map_err(|e| ChatError::Configuration(e.to_string()))
    }

    /// Returns the provider client, building it from the environment on
    /// first use. The lock is not held across the provider call.
    async fn client(&self) -> Result<Arc<dyn ChatClient>, ChatError> {
        if let Some(client) = self.chat_client.read().await.as_ref() {
            return Ok(Arc::clone(client));
        }

        let mut guard = self.chat_client.write().await;
        if let Some(client) = guard.as_ref() {
            return Ok(Arc::clone(client));
        }

        let client = self.build_client()?;
        info!("Chat client initialized for model: {}", client.get_model());
        *guard = Some(Arc::clone(&client));
        Ok(client)
    }

    /// Replaces the cached client with one built from the current
    /// environment.
    pub async fn reload_client(&self) -> Result<(), ChatError> {
        let client = self.build_client()?;
        info!("Chat client reloaded for model: {}", client.get_model());
        *self.chat_client.write().await = Some(client);
        Ok(())
    }

    /// Forwards one chat request and returns the model's reply text.
    pub async fn chat(
        &self,
        message: &str,
        history: &[ChatTurn]
    ) -> Result<String, ChatError> {
        let messages = assemble_prompt(message, history)?;
        let client = self.client().await?;

        let completion = client
            .complete(&messages).await
            .map_err(|e| ChatError::Upstream(e.to_string()))?;
        Ok(completion.response)
    }
}
