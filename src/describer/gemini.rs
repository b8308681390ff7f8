//! Gemini API クライアント（画像の自由記述）

use super::{read_image_base64, require_key, ContentDescriber};
use crate::ai_provider::AiProvider;
use crate::error::{Result, TellMeMoreError};
use async_trait::async_trait;
use serde::Serialize;
use std::path::Path;
use tell_me_more_common::{parse_gemini_response, Description, DESCRIBE_IMAGE_PROMPT};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub struct GeminiDescriber {
    api_key: Option<String>,
    model: String,
    http_client: reqwest::Client,
}

impl GeminiDescriber {
    pub fn new(api_key: Option<String>, model: String) -> Self {
        Self {
            api_key,
            model,
            http_client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", GEMINI_API_BASE, self.model)
    }
}

#[async_trait]
impl ContentDescriber for GeminiDescriber {
    fn name(&self) -> &'static str {
        AiProvider::Gemini.service_name()
    }

    async fn describe(&self, image_path: &Path) -> Result<Description> {
        let api_key = require_key(&self.api_key, AiProvider::Gemini)?;
        let (mime_type, data) = read_image_base64(image_path)?;

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData { mime_type, data },
                    },
                    Part::Text {
                        text: DESCRIBE_IMAGE_PROMPT,
                    },
                ],
            }],
        };

        let response = self
            .http_client
            .post(self.endpoint())
            .query(&[("key", api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| TellMeMoreError::ApiCall(format!("Gemini APIリクエストに失敗: {}", e)))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(TellMeMoreError::ApiCall(format!(
                "Gemini API エラー ({}): {}",
                status, body
            )));
        }

        let description = parse_gemini_response(&body)?;
        tracing::debug!(chars = description.prompt_text().len(), "Gemini 説明取得");
        Ok(description)
    }
}

/// Gemini APIリクエスト
#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: &'static str },
    InlineData { inline_data: InlineData },
}

#[derive(Serialize)]
struct InlineData {
    mime_type: &'static str,
    data: String,
}
