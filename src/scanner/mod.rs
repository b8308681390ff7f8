use crate::error::{Result, TellMeMoreError};
use std::path::{Path, PathBuf};
use tell_me_more_common::is_target_file;
use walkdir::WalkDir;

/// リネーム候補ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub file_name: String,
    /// 拡張子を除いたファイル名
    pub stem: String,
    /// 拡張子（ドットなし、無ければ空）
    pub extension: String,
}

impl CandidateFile {
    pub fn from_path(path: &Path) -> Self {
        let lossy = |s: Option<&std::ffi::OsStr>| {
            s.map(|n| n.to_string_lossy().to_string()).unwrap_or_default()
        };
        Self {
            path: path.to_path_buf(),
            file_name: lossy(path.file_name()),
            stem: lossy(path.file_stem()),
            extension: lossy(path.extension()),
        }
    }

    pub fn directory(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// フォルダを再帰的に走査してリネーム候補を収集
///
/// 走査エラーは即座に返す（実行全体を中断）。
/// リネーム前に一覧を確定させるので、リネーム後のファイルを再訪問しない。
/// シンボリックリンクは辿る。リンク先が無いものは警告してスキップ、循環は走査エラー。
pub fn scan_candidates(folder: &Path) -> Result<Vec<CandidateFile>> {
    if !folder.exists() {
        return Err(TellMeMoreError::FolderNotFound(folder.display().to_string()));
    }

    let mut candidates = Vec::new();

    for entry in WalkDir::new(folder).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if is_dangling_link(&e) => {
                tracing::warn!(error = %e, "リンク先が存在しないためスキップ");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !is_target_file(&name) {
            tracing::trace!(path = %entry.path().display(), "対象外");
            continue;
        }

        candidates.push(CandidateFile::from_path(entry.path()));
    }

    Ok(candidates)
}

fn is_dangling_link(err: &walkdir::Error) -> bool {
    let not_found = err
        .io_error()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound);
    let is_link = err
        .path()
        .and_then(|p| p.symlink_metadata().ok())
        .is_some_and(|m| m.file_type().is_symlink());
    not_found && is_link
}
