//! tell-me-more - 画像の内容からファイル名を提案してリネームするツール
//!
//! # 流れ
//! - フォルダを再帰的に走査し、"screenshot" / DALL-E 系の名前のファイルを抽出
//! - Gemini または Cloud Vision で画像の説明・ラベルを取得
//! - OpenAI でファイル名を提案
//! - 確認後にリネーム

pub mod ai_provider;
pub mod cli;
pub mod config;
pub mod confirm;
pub mod describer;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod scanner;
pub mod suggester;
