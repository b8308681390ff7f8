//! リネーム処理の本体
//!
//! 候補ファイルごとに: 画像説明 → ファイル名提案 → 確認 → リネーム。
//! 画像説明と提案の失敗はそのファイルだけの問題として扱い、次のファイルへ進む。
//! 走査とリネームの失敗は実行全体を中断する。

use crate::confirm::Prompter;
use crate::describer::ContentDescriber;
use crate::error::{Result, TellMeMoreError};
use crate::scanner::{scan_candidates, CandidateFile};
use crate::suggester::NameSuggester;
use std::path::{Path, PathBuf};
use tell_me_more_common::{sanitize_file_name, Description};
use tracing::{info, warn};

/// 1ファイルの処理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Renamed { from: PathBuf, to: PathBuf },
    /// 確認で否定された
    Declined,
    /// 提案の取得に失敗
    SuggestionFailed,
    /// サニタイズ後の名前が空
    EmptyName,
    /// 提案名が現在の名前と同じ
    Unchanged,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub candidates: usize,
    pub renamed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &FileOutcome) {
        self.candidates += 1;
        match outcome {
            FileOutcome::Renamed { .. } => self.renamed += 1,
            FileOutcome::SuggestionFailed => self.failed += 1,
            FileOutcome::Declined | FileOutcome::EmptyName | FileOutcome::Unchanged => {
                self.skipped += 1
            }
        }
    }
}

pub struct Renamer {
    describer: Box<dyn ContentDescriber>,
    suggester: NameSuggester,
    prompter: Box<dyn Prompter>,
}

impl Renamer {
    pub fn new(
        describer: Box<dyn ContentDescriber>,
        suggester: NameSuggester,
        prompter: Box<dyn Prompter>,
    ) -> Self {
        Self {
            describer,
            suggester,
            prompter,
        }
    }

    /// フォルダ以下の候補を順に処理
    pub async fn run(&mut self, folder: &Path) -> Result<RunSummary> {
        let candidates = scan_candidates(folder)?;
        info!(
            folder = %folder.display(),
            count = candidates.len(),
            describer = self.describer.name(),
            "候補ファイルを検出"
        );

        let mut summary = RunSummary::default();
        for candidate in &candidates {
            let outcome = self.process(candidate).await?;
            summary.record(&outcome);
        }

        Ok(summary)
    }

    /// 1ファイルを処理
    pub async fn process(&mut self, candidate: &CandidateFile) -> Result<FileOutcome> {
        println!("対象ファイル: {}", candidate.path.display());

        let description = match self.describer.describe(&candidate.path).await {
            Ok(description) => description,
            Err(e) => {
                warn!(
                    path = %candidate.path.display(),
                    error = %e,
                    "画像説明の取得に失敗、ファイル名をラベルとして使用"
                );
                Description::fallback(&candidate.stem)
            }
        };

        let suggestion = match self.suggester.suggest(&description).await {
            Ok(suggestion) => suggestion,
            Err(e) => {
                warn!(path = %candidate.path.display(), error = %e, "ファイル名の提案に失敗");
                return Ok(FileOutcome::SuggestionFailed);
            }
        };

        println!("提案名: {}", suggestion);

        if !self.prompter.confirm(&suggestion)? {
            return Ok(FileOutcome::Declined);
        }

        let sanitized = sanitize_file_name(&suggestion);
        if sanitized.is_empty() {
            warn!(suggestion = %suggestion, "使用できる文字が残らないためスキップ");
            return Ok(FileOutcome::EmptyName);
        }

        let target = build_target_path(candidate, &sanitized);
        if target == candidate.path {
            println!("変更なし: {}", candidate.path.display());
            return Ok(FileOutcome::Unchanged);
        }

        let target = resolve_target(&candidate.path, &target);
        rename_file(&candidate.path, &target)?;
        println!(
            "リネーム: {} -> {}",
            candidate.path.display(),
            target.display()
        );

        Ok(FileOutcome::Renamed {
            from: candidate.path.clone(),
            to: target,
        })
    }
}

/// 元のディレクトリ + サニタイズ済みの名前 + 元の拡張子
pub fn build_target_path(candidate: &CandidateFile, sanitized: &str) -> PathBuf {
    let file_name = if candidate.extension.is_empty() {
        sanitized.to_string()
    } else {
        format!("{}.{}", sanitized, candidate.extension)
    };
    candidate.directory().join(file_name)
}

/// リネーム先を決定
///
/// 既存ファイルが元ファイル自身（大文字小文字のみ違う場合など）ならそのまま、
/// 別のファイルなら連番を付与する。
pub fn resolve_target(source: &Path, target: &Path) -> PathBuf {
    if same_file::is_same_file(source, target).unwrap_or(false) {
        return target.to_path_buf();
    }
    unique_path(target)
}

/// 同名ファイルがある場合は連番を付与
pub fn unique_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let ext = path.extension().map(|e| e.to_string_lossy().to_string());

    let mut counter = 1;
    loop {
        let name = match &ext {
            Some(ext) => format!("{}_{}.{}", stem, counter, ext),
            None => format!("{}_{}", stem, counter),
        };
        let candidate = parent.join(name);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

fn rename_file(from: &Path, to: &Path) -> Result<()> {
    std::fs::rename(from, to).map_err(|source| TellMeMoreError::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}
