//! ファイル名によるリネーム対象判定

use regex::Regex;

lazy_static::lazy_static! {
    // "screenshot" または DALL-E 系の名前（dalle, dall-e, DALL·E, dall_é など）
    static ref TARGET_RE: Regex = Regex::new(r"(?i)screenshot|dall[\s\-_·]?[eé]").unwrap();
}

/// ファイル名がリネーム対象か判定
///
/// 大文字小文字を区別せず "screenshot" を含むか、DALL-E の表記揺れに一致すれば true。
pub fn is_target_file(file_name: &str) -> bool {
    TARGET_RE.is_match(file_name)
}
