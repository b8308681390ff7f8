//! OpenAI chat/completions バックエンド

use super::ChatBackend;
use crate::config::{Config, OPENAI_API_KEY_ENV};
use crate::error::{Result, TellMeMoreError};
use async_trait::async_trait;
use serde::Serialize;
use tell_me_more_common::parse_chat_response;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

pub struct OpenAiBackend {
    api_key: Option<String>,
    model: String,
    max_tokens: u32,
    temperature: f32,
    http_client: reqwest::Client,
}

impl OpenAiBackend {
    pub fn from_config(config: &Config) -> Self {
        Self {
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            http_client: reqwest::Client::new(),
        }
    }

    fn build_request<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

#[async_trait]
impl ChatBackend for OpenAiBackend {
    async fn complete(&self, prompt: &str) -> Result<Vec<String>> {
        let api_key = self.api_key.as_deref().ok_or(TellMeMoreError::MissingApiKey {
            service: "OpenAI",
            env_var: OPENAI_API_KEY_ENV,
        })?;

        let response = self
            .http_client
            .post(OPENAI_API_URL)
            .bearer_auth(api_key)
            .json(&self.build_request(prompt))
            .send()
            .await
            .map_err(|e| TellMeMoreError::ApiCall(format!("OpenAI APIリクエストに失敗: {}", e)))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(TellMeMoreError::ApiCall(format!(
                "OpenAI API エラー ({}): {}",
                status, body
            )));
        }

        Ok(parse_chat_response(&body)?)
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}
