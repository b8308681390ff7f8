//! 画像説明モジュール
//!
//! 画像ファイルからラベル列または説明文を得る。実装は2種類:
//! - `VisionLabelDescriber`: Cloud Vision のラベル/テキスト/Web検出
//! - `GeminiDescriber`: Gemini による自由記述
//!
//! どちらを使うかは設定 (`describer`) で切り替える。

mod gemini;
mod vision_labels;

pub use gemini::GeminiDescriber;
pub use vision_labels::VisionLabelDescriber;

use crate::ai_provider::AiProvider;
use crate::config::Config;
use crate::error::{Result, TellMeMoreError};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use std::path::Path;
use tell_me_more_common::Description;

#[async_trait]
pub trait ContentDescriber: Send + Sync {
    /// ログ表示用のサービス名
    fn name(&self) -> &'static str;

    /// 画像の説明を取得（失敗しても呼び出し側でファイル名にフォールバックする）
    async fn describe(&self, image_path: &Path) -> Result<Description>;
}

/// 設定に応じた画像説明クライアントを作成
pub fn from_config(config: &Config) -> Box<dyn ContentDescriber> {
    match config.describer {
        AiProvider::Gemini => Box::new(GeminiDescriber::new(
            config.describer_api_key(),
            config.gemini_model.clone(),
        )),
        AiProvider::Labels => Box::new(VisionLabelDescriber::new(config.describer_api_key())),
    }
}

/// 拡張子からMIMEタイプを判定
pub fn mime_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "heic" => Some("image/heic"),
        "heif" => Some("image/heif"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}

/// 画像を読み込んでBase64化
///
/// # Returns
/// (MIMEタイプ, Base64文字列)
pub(crate) fn read_image_base64(image_path: &Path) -> Result<(&'static str, String)> {
    let mime_type = mime_type_for(image_path)
        .ok_or_else(|| TellMeMoreError::UnsupportedImage(image_path.display().to_string()))?;

    let image_data = std::fs::read(image_path).map_err(|e| {
        TellMeMoreError::ImageLoad(format!("{}: {}", image_path.display(), e))
    })?;

    Ok((mime_type, STANDARD.encode(&image_data)))
}

/// APIキーを取り出す（未設定ならエラー）
pub(crate) fn require_key(key: &Option<String>, provider: AiProvider) -> Result<String> {
    key.clone().ok_or(TellMeMoreError::MissingApiKey {
        service: provider.service_name(),
        env_var: provider.api_key_env(),
    })
}
