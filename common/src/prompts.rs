//! プロンプト生成モジュール
//!
//! - DESCRIBE_IMAGE_PROMPT: 生成AIによる画像説明の指示
//! - build_suggestion_prompt: ファイル名提案用プロンプト

use crate::types::Description;

/// ファイル名の最大文字数（モデルへの指示値）
pub const MAX_SUGGESTION_CHARS: usize = 40;

/// 画像説明の指示文
pub const DESCRIBE_IMAGE_PROMPT: &str = "Can you tell me about this photo, describe it in as much detail as possible, include an overall impression about what the image may be about.";

const ROLE: &str = "You are a creative assistant that generates human-like filenames for images.";

const NAMING_RULES: &str = "Suggest a short, descriptive, and human-friendly filename for the image (without file extension). \
There will be a large reward for the best, most human file name. Don't forget to be a human: the output name MUST be short.
For example a screenshot of the youtube website will have lots of descriptive and various interesting points, but a good name would be 'youtube_homepage'.";

/// ファイル名提案プロンプト生成
///
/// ラベル・説明がある場合はそれを埋め込み、無い場合は想像で命名させる。
pub fn build_suggestion_prompt(description: &Description) -> String {
    let context = if description.is_empty() {
        "An image is provided, but no labels or descriptions are available.\n\nUsing your imagination, ".to_string()
    } else {
        let heading = match description {
            Description::Text(_) => "A description of the image",
            Description::Labels(_) => "Labels detected in the image",
        };
        format!(
            "{}:\n{}\n\nBased on this, ",
            heading,
            description.prompt_text()
        )
    };

    format!(
        "{ROLE}\n\n{context}{rules}\n\nMake sure the name suggestion is under {max} characters, the fewer words the better. Reply with the name only:",
        rules = lowercase_first(NAMING_RULES),
        max = MAX_SUGGESTION_CHARS,
    )
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
