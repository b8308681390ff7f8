//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// リモートAPIがエラーオブジェクトを返した
    #[error("API error ({code}): {message}")]
    Api { code: i64, message: String },

    /// レスポンスに有効な内容が含まれていない
    #[error("Empty response: {0}")]
    EmptyResponse(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
