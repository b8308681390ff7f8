//! APIレスポンスパーサー
//!
//! 3つのリモートAPIのJSONレスポンスから必要な部分を取り出す:
//! - Cloud Vision images:annotate → ラベル列
//! - Gemini generateContent → 説明テキスト
//! - OpenAI chat/completions → 提案候補

use crate::error::{Error, Result};
use crate::types::Description;
use serde::Deserialize;

/// 検出テキストから採用する最大行数
pub const MAX_TEXT_LINES: usize = 3;

// =============================================
// Cloud Vision
// =============================================

#[derive(Debug, Deserialize)]
struct VisionResponse {
    #[serde(default)]
    responses: Vec<AnnotateImageResponse>,
    error: Option<ApiStatus>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct AnnotateImageResponse {
    label_annotations: Vec<EntityAnnotation>,
    text_annotations: Vec<EntityAnnotation>,
    web_detection: Option<WebDetection>,
    error: Option<ApiStatus>,
}

#[derive(Debug, Deserialize)]
struct EntityAnnotation {
    #[serde(default)]
    description: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct WebDetection {
    web_entities: Vec<WebEntity>,
}

#[derive(Debug, Deserialize)]
struct WebEntity {
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct ApiStatus {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

impl ApiStatus {
    fn into_error(self) -> Error {
        Error::Api {
            code: self.code,
            message: self.message,
        }
    }
}

/// Vision APIレスポンスからラベルを抽出
///
/// 順序: ラベル検出 → 検出テキスト（先頭 `MAX_TEXT_LINES` 行） → Webエンティティ。
/// 重複は最初の出現のみ残す。ラベルが1つも無ければ `EmptyResponse`。
pub fn parse_vision_response(response: &str) -> Result<Description> {
    let parsed: VisionResponse = serde_json::from_str(response)?;

    if let Some(status) = parsed.error {
        return Err(status.into_error());
    }

    let first = parsed
        .responses
        .into_iter()
        .next()
        .ok_or_else(|| Error::EmptyResponse("Vision APIのレスポンスが空です".into()))?;

    if let Some(status) = first.error {
        return Err(status.into_error());
    }

    let mut labels: Vec<String> = first
        .label_annotations
        .into_iter()
        .map(|a| a.description)
        .collect();

    // textAnnotations[0] は画像全体のテキスト
    if let Some(full_text) = first.text_annotations.into_iter().next() {
        labels.extend(
            full_text
                .description
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .take(MAX_TEXT_LINES)
                .map(str::to_string),
        );
    }

    if let Some(web) = first.web_detection {
        labels.extend(web.web_entities.into_iter().map(|e| e.description));
    }

    let description = Description::from_labels(labels);
    if description.is_empty() {
        return Err(Error::EmptyResponse("ラベルが検出されませんでした".into()));
    }
    Ok(description)
}

// =============================================
// Gemini
// =============================================

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    error: Option<ApiStatus>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Geminiレスポンスから説明テキストを抽出
///
/// 全候補の全テキストパートを連結する。テキストが空なら `EmptyResponse`。
pub fn parse_gemini_response(response: &str) -> Result<Description> {
    let parsed: GeminiResponse = serde_json::from_str(response)?;

    if let Some(status) = parsed.error {
        return Err(status.into_error());
    }

    let text: String = parsed
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .filter_map(|p| p.text)
        .collect();

    let description = Description::Text(text);
    if description.is_empty() {
        return Err(Error::EmptyResponse("Geminiの説明が空です".into()));
    }
    Ok(description)
}

// =============================================
// OpenAI chat/completions
// =============================================

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// chat/completions レスポンスから各候補の本文を取り出す
///
/// 候補が0件でもエラーにはしない（判定は呼び出し側）。
pub fn parse_chat_response(response: &str) -> Result<Vec<String>> {
    let parsed: ChatResponse = serde_json::from_str(response)?;
    Ok(parsed
        .choices
        .into_iter()
        .map(|c| c.message.content.unwrap_or_default())
        .collect())
}
