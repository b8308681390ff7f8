use crate::ai_provider::AiProvider;
use crate::error::{Result, TellMeMoreError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DESCRIBER_ENV: &str = "TELL_ME_MORE_DESCRIBER";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 画像説明サービス (gemini/labels)
    pub describer: AiProvider,
    pub gemini_model: String,
    pub openai_model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub gemini_api_key: Option<String>,
    pub vision_api_key: Option<String>,
    pub openai_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            describer: AiProvider::default(),
            gemini_model: "gemini-1.5-flash".into(),
            openai_model: "gpt-4".into(),
            max_tokens: 100,
            temperature: 0.9,
            gemini_api_key: None,
            vision_api_key: None,
            openai_api_key: None,
        }
    }
}

impl Config {
    /// 設定ファイルを読み込み、環境変数で上書き
    pub fn load() -> Result<Self> {
        let config = Self::load_from(&Self::config_path()?)?;
        config.with_env(|key| std::env::var(key).ok())
    }

    /// 指定パスから読み込み（存在しなければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| TellMeMoreError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("tell-me-more").join("config.json"))
    }

    /// 環境変数を優先して適用
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(value) = non_empty(DESCRIBER_ENV) {
            self.describer = value
                .parse()
                .map_err(|e: String| TellMeMoreError::Config(format!("{}: {}", DESCRIBER_ENV, e)))?;
        }
        if let Some(key) = non_empty(AiProvider::Gemini.api_key_env()) {
            self.gemini_api_key = Some(key);
        }
        if let Some(key) = non_empty(AiProvider::Labels.api_key_env()) {
            self.vision_api_key = Some(key);
        }
        if let Some(key) = non_empty(OPENAI_API_KEY_ENV) {
            self.openai_api_key = Some(key);
        }

        Ok(self)
    }

    /// 選択中の画像説明サービスのAPIキー
    pub fn describer_api_key(&self) -> Option<String> {
        match self.describer {
            AiProvider::Gemini => self.gemini_api_key.clone(),
            AiProvider::Labels => self.vision_api_key.clone(),
        }
    }
}
