use serde::{Deserialize, Serialize};

/// 画像説明に使うAIサービス
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    /// Gemini による自由記述
    #[default]
    Gemini,
    /// Cloud Vision によるラベル検出
    #[serde(alias = "vision")]
    Labels,
}

impl AiProvider {
    pub fn service_name(&self) -> &'static str {
        match self {
            AiProvider::Gemini => "Gemini",
            AiProvider::Labels => "Cloud Vision",
        }
    }

    /// APIキーを読む環境変数
    pub fn api_key_env(&self) -> &'static str {
        match self {
            AiProvider::Gemini => "GEMINI_API_KEY",
            AiProvider::Labels => "GOOGLE_VISION_API_KEY",
        }
    }
}

impl std::str::FromStr for AiProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" => Ok(AiProvider::Gemini),
            "labels" | "vision" => Ok(AiProvider::Labels),
            _ => Err(format!("Unknown describer: {}. Use gemini or labels", s)),
        }
    }
}

impl std::fmt::Display for AiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AiProvider::Gemini => write!(f, "gemini"),
            AiProvider::Labels => write!(f, "labels"),
        }
    }
}
