//! 提案名をファイル名として安全な形に変換

use regex::Regex;

lazy_static::lazy_static! {
    // 単語文字・ハイフン・スペース以外
    static ref INVALID_RE: Regex = Regex::new(r"[^\w\- ]").unwrap();
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// ファイル名に使用できない文字を除去
///
/// 1. 単語文字・ハイフン・スペース以外を削除
/// 2. 前後の空白をトリム
/// 3. 連続する空白を1つのアンダースコアに置換
///
/// 冪等: `sanitize_file_name(&sanitize_file_name(x)) == sanitize_file_name(x)`
pub fn sanitize_file_name(name: &str) -> String {
    let cleaned = INVALID_RE.replace_all(name, "");
    WHITESPACE_RE
        .replace_all(cleaned.trim(), "_")
        .into_owned()
}
