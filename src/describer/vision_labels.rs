//! Cloud Vision API クライアント（ラベル検出）

use super::{read_image_base64, require_key, ContentDescriber};
use crate::ai_provider::AiProvider;
use crate::error::{Result, TellMeMoreError};
use async_trait::async_trait;
use serde::Serialize;
use std::path::Path;
use tell_me_more_common::{parse_vision_response, Description};

const VISION_API_URL: &str = "https://vision.googleapis.com/v1/images:annotate";

/// 1機能あたりの最大件数
const MAX_RESULTS: u32 = 10;

pub struct VisionLabelDescriber {
    api_key: Option<String>,
    http_client: reqwest::Client,
}

impl VisionLabelDescriber {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ContentDescriber for VisionLabelDescriber {
    fn name(&self) -> &'static str {
        AiProvider::Labels.service_name()
    }

    async fn describe(&self, image_path: &Path) -> Result<Description> {
        let api_key = require_key(&self.api_key, AiProvider::Labels)?;
        let (_, content) = read_image_base64(image_path)?;

        let request = VisionRequest {
            requests: vec![AnnotateImageRequest {
                image: Image { content },
                features: vec![
                    Feature::new("LABEL_DETECTION"),
                    Feature::new("TEXT_DETECTION"),
                    Feature::new("WEB_DETECTION"),
                ],
            }],
        };

        let response = self
            .http_client
            .post(VISION_API_URL)
            .query(&[("key", api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| TellMeMoreError::ApiCall(format!("Vision APIリクエストに失敗: {}", e)))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(TellMeMoreError::ApiCall(format!(
                "Vision API エラー ({}): {}",
                status, body
            )));
        }

        let description = parse_vision_response(&body)?;
        tracing::debug!(labels = %description.prompt_text(), "Vision API ラベル取得");
        Ok(description)
    }
}

// Vision API リクエスト構造体

#[derive(Serialize)]
struct VisionRequest {
    requests: Vec<AnnotateImageRequest>,
}

#[derive(Serialize)]
struct AnnotateImageRequest {
    image: Image,
    features: Vec<Feature>,
}

#[derive(Serialize)]
struct Image {
    content: String,
}

#[derive(Serialize)]
struct Feature {
    #[serde(rename = "type")]
    feature_type: &'static str,
    #[serde(rename = "maxResults")]
    max_results: u32,
}

impl Feature {
    fn new(feature_type: &'static str) -> Self {
        Self {
            feature_type,
            max_results: MAX_RESULTS,
        }
    }
}
