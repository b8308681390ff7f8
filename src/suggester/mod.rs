//! ファイル名提案モジュール
//!
//! 画像の説明からプロンプトを組み立て、言語モデルに短いファイル名を提案させる。
//! 通信部分は `ChatBackend` で差し替え可能。

mod openai;

pub use openai::OpenAiBackend;

use crate::config::Config;
use crate::error::{Result, TellMeMoreError};
use async_trait::async_trait;
use tell_me_more_common::{build_suggestion_prompt, Description};

/// 言語モデルへの1回の問い合わせ
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// プロンプトを送り、各候補の本文を返す
    async fn complete(&self, prompt: &str) -> Result<Vec<String>>;
}

pub struct NameSuggester {
    backend: Box<dyn ChatBackend>,
}

impl NameSuggester {
    pub fn new(backend: Box<dyn ChatBackend>) -> Self {
        Self { backend }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Box::new(OpenAiBackend::from_config(config)))
    }

    /// 説明からファイル名を提案（拡張子なし、前後空白除去済み）
    pub async fn suggest(&self, description: &Description) -> Result<String> {
        let prompt = build_suggestion_prompt(description);
        tracing::debug!(prompt_len = prompt.len(), "ファイル名提案をリクエスト");

        let choices = self.backend.complete(&prompt).await?;

        choices
            .into_iter()
            .next()
            .map(|c| c.trim().to_string())
            .ok_or_else(|| TellMeMoreError::EmptyResponse("言語モデルから候補が返りませんでした".into()))
    }
}
