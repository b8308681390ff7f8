//! 画像説明の型定義
//!
//! Content Describer の出力で、Name Suggester に渡されるまでの間だけ保持される。

use std::collections::HashSet;

/// 画像の説明結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    /// 生成AIによる自由記述
    Text(String),
    /// 重複除去済みのラベル（出現順）
    Labels(Vec<String>),
}

impl Description {
    /// ラベル列から作成（前後空白を除去し、空要素と大文字小文字違いの重複を除く）
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let labels = labels
            .into_iter()
            .filter_map(|l| {
                let label = l.as_ref().trim().to_string();
                if label.is_empty() || !seen.insert(label.to_lowercase()) {
                    None
                } else {
                    Some(label)
                }
            })
            .collect();
        Description::Labels(labels)
    }

    /// 説明が得られなかった場合の代替ラベル（拡張子を除いたファイル名）
    pub fn fallback(stem: &str) -> Self {
        Self::from_labels([stem])
    }

    /// 説明もラベルも無い
    pub fn is_empty(&self) -> bool {
        match self {
            Description::Text(text) => text.trim().is_empty(),
            Description::Labels(labels) => labels.is_empty(),
        }
    }

    /// プロンプトに埋め込むテキスト
    pub fn prompt_text(&self) -> String {
        match self {
            Description::Text(text) => text.trim().to_string(),
            Description::Labels(labels) => labels.join(", "),
        }
    }
}

impl Default for Description {
    fn default() -> Self {
        Description::Labels(Vec::new())
    }
}
