use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TellMeMoreError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("{service} のAPIキーが設定されていません。環境変数 {env_var} を設定してください")]
    MissingApiKey {
        service: &'static str,
        env_var: &'static str,
    },

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("ディレクトリ走査エラー: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("対応していない画像形式です: {0}")]
    UnsupportedImage(String),

    #[error("API呼び出しエラー: {0}")]
    ApiCall(String),

    #[error("APIレスポンスが空です: {0}")]
    EmptyResponse(String),

    #[error("リネームに失敗: {} -> {}: {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] tell_me_more_common::Error),
}

pub type Result<T> = std::result::Result<T, TellMeMoreError>;
