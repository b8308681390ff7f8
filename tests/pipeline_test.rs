//! リネーム処理の結合テスト
//!
//! 画像説明・言語モデルはテスト内の実装に差し替え、確認入力はメモリから与える

use async_trait::async_trait;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tell_me_more::confirm::LinePrompter;
use tell_me_more::describer::ContentDescriber;
use tell_me_more::error::{Result, TellMeMoreError};
use tell_me_more::pipeline::{FileOutcome, Renamer, RunSummary};
use tell_me_more::suggester::{ChatBackend, NameSuggester};
use tell_me_more_common::Description;
use tempfile::tempdir;

/// 呼び出されたパスを記録する画像説明
struct FakeDescriber {
    labels: Option<Vec<&'static str>>,
    visited: Arc<Mutex<Vec<PathBuf>>>,
}

#[async_trait]
impl ContentDescriber for FakeDescriber {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn describe(&self, image_path: &Path) -> Result<Description> {
        self.visited.lock().unwrap().push(image_path.to_path_buf());
        match &self.labels {
            Some(labels) => Ok(Description::from_labels(labels.iter())),
            None => Err(TellMeMoreError::ApiCall("connection refused".into())),
        }
    }
}

/// 固定の返答を返し、プロンプトを記録する言語モデル
struct FakeChat {
    reply: Option<&'static str>,
    prompts: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl ChatBackend for FakeChat {
    async fn complete(&self, prompt: &str) -> Result<Vec<String>> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.reply {
            Some(reply) => Ok(vec![reply.to_string()]),
            None => Err(TellMeMoreError::MissingApiKey {
                service: "OpenAI",
                env_var: "OPENAI_API_KEY",
            }),
        }
    }
}

struct Harness {
    renamer: Renamer,
    visited: Arc<Mutex<Vec<PathBuf>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

fn harness(
    labels: Option<Vec<&'static str>>,
    reply: Option<&'static str>,
    input: impl AsRef<[u8]>,
) -> Harness {
    let visited = Arc::new(Mutex::new(Vec::new()));
    let prompts = Arc::new(Mutex::new(Vec::new()));

    let describer = FakeDescriber {
        labels,
        visited: visited.clone(),
    };
    let chat = FakeChat {
        reply,
        prompts: prompts.clone(),
    };
    let prompter = LinePrompter::new(Cursor::new(input.as_ref().to_vec()), std::io::sink());

    Harness {
        renamer: Renamer::new(
            Box::new(describer),
            NameSuggester::new(Box::new(chat)),
            Box::new(prompter),
        ),
        visited,
        prompts,
    }
}

/// 対象ファイルのみ処理され、確認後にリネームされる
#[tokio::test]
async fn test_only_candidates_are_processed_and_renamed() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("Screenshot_2024.png"), b"png").unwrap();
    std::fs::write(dir.path().join("vacation.png"), b"png").unwrap();

    let mut h = harness(Some(vec!["cat", "dog"]), Some("  Cat & Dog Friends! \n"), "y\n");
    let summary = h.renamer.run(dir.path()).await.unwrap();

    assert_eq!(
        summary,
        RunSummary {
            candidates: 1,
            renamed: 1,
            skipped: 0,
            failed: 0,
        }
    );
    assert_eq!(
        *h.visited.lock().unwrap(),
        vec![dir.path().join("Screenshot_2024.png")]
    );
    assert!(h.prompts.lock().unwrap()[0].contains("cat, dog"));

    assert!(dir.path().join("Cat_Dog_Friends.png").exists());
    assert!(!dir.path().join("Screenshot_2024.png").exists());
    assert!(dir.path().join("vacation.png").exists());
}

/// 否定すればリネームしない
#[tokio::test]
async fn test_declined_keeps_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("screenshot.png"), b"png").unwrap();

    let mut h = harness(Some(vec!["chart"]), Some("sales_chart"), "n\n");
    let summary = h.renamer.run(dir.path()).await.unwrap();

    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.renamed, 0);
    assert!(dir.path().join("screenshot.png").exists());
    assert!(!dir.path().join("sales_chart.png").exists());
}

/// 画像説明に失敗してもファイル名をラベルにして続行
#[tokio::test]
async fn test_describer_failure_falls_back_to_file_stem() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("DALL-E sunset.webp"), b"webp").unwrap();

    let mut h = harness(None, Some("sunset_painting"), "Y\n");
    let summary = h.renamer.run(dir.path()).await.unwrap();

    assert_eq!(summary.renamed, 1);
    assert!(h.prompts.lock().unwrap()[0].contains("DALL-E sunset"));
    assert!(dir.path().join("sunset_painting.webp").exists());
}

/// 提案に失敗したファイルはスキップし、次のファイルへ進む
#[tokio::test]
async fn test_suggestion_failure_skips_every_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("screenshot_a.png"), b"png").unwrap();
    std::fs::write(dir.path().join("screenshot_b.png"), b"png").unwrap();

    let mut h = harness(Some(vec!["x"]), None, "y\ny\n");
    let summary = h.renamer.run(dir.path()).await.unwrap();

    assert_eq!(summary.candidates, 2);
    assert_eq!(summary.failed, 2);
    assert_eq!(h.visited.lock().unwrap().len(), 2);
    assert!(dir.path().join("screenshot_a.png").exists());
    assert!(dir.path().join("screenshot_b.png").exists());
}

/// 既存ファイルは上書きしない
#[tokio::test]
async fn test_existing_target_gets_suffix() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("screenshot.png"), b"new").unwrap();
    std::fs::write(dir.path().join("login_page.png"), b"old").unwrap();

    let mut h = harness(Some(vec!["login"]), Some("login page"), "y\n");
    let candidate = tell_me_more::scanner::CandidateFile::from_path(&dir.path().join("screenshot.png"));
    let outcome = h.renamer.process(&candidate).await.unwrap();

    assert_eq!(
        outcome,
        FileOutcome::Renamed {
            from: dir.path().join("screenshot.png"),
            to: dir.path().join("login_page_1.png"),
        }
    );
    assert_eq!(std::fs::read(dir.path().join("login_page.png")).unwrap(), b"old");
    assert_eq!(std::fs::read(dir.path().join("login_page_1.png")).unwrap(), b"new");
}

/// サニタイズ後に空になる提案はスキップ
#[tokio::test]
async fn test_empty_sanitized_name_is_skipped() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("screenshot.png"), b"png").unwrap();

    let mut h = harness(Some(vec!["?"]), Some("!!!"), "y\n");
    let candidate = tell_me_more::scanner::CandidateFile::from_path(&dir.path().join("screenshot.png"));
    let outcome = h.renamer.process(&candidate).await.unwrap();

    assert_eq!(outcome, FileOutcome::EmptyName);
    assert!(dir.path().join("screenshot.png").exists());
}

/// 提案名が現在の名前と同じなら何もしない
#[tokio::test]
async fn test_same_name_is_unchanged() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("screenshot.png"), b"png").unwrap();

    let mut h = harness(Some(vec!["screen"]), Some("screenshot"), "y\n");
    let summary = h.renamer.run(dir.path()).await.unwrap();

    assert_eq!(summary.skipped, 1);
    assert!(dir.path().join("screenshot.png").exists());
    assert!(!dir.path().join("screenshot_1.png").exists());
}

/// 説明取得中に元ファイルが消える画像説明（リネーム失敗を起こす）
struct VanishingDescriber {
    visited: Arc<Mutex<Vec<PathBuf>>>,
}

#[async_trait]
impl ContentDescriber for VanishingDescriber {
    fn name(&self) -> &'static str {
        "vanishing"
    }

    async fn describe(&self, image_path: &Path) -> Result<Description> {
        self.visited.lock().unwrap().push(image_path.to_path_buf());
        std::fs::remove_file(image_path)?;
        Ok(Description::from_labels(["gone"]))
    }
}

/// リネーム失敗は致命的エラーで、以降のファイルは処理しない
#[tokio::test]
async fn test_rename_failure_aborts_run() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("screenshot_a.png"), b"png").unwrap();
    std::fs::write(dir.path().join("screenshot_b.png"), b"png").unwrap();

    let visited = Arc::new(Mutex::new(Vec::new()));
    let chat = FakeChat {
        reply: Some("renamed"),
        prompts: Arc::new(Mutex::new(Vec::new())),
    };
    let mut renamer = Renamer::new(
        Box::new(VanishingDescriber {
            visited: visited.clone(),
        }),
        NameSuggester::new(Box::new(chat)),
        Box::new(LinePrompter::new(Cursor::new(b"y\ny\n".to_vec()), std::io::sink())),
    );

    let result = renamer.run(dir.path()).await;

    match result {
        Err(TellMeMoreError::Rename { from, .. }) => {
            assert_eq!(from, dir.path().join("screenshot_a.png"));
        }
        other => panic!("Expected Rename error, got {:?}", other),
    }
    assert_eq!(
        *visited.lock().unwrap(),
        vec![dir.path().join("screenshot_a.png")]
    );
    assert!(dir.path().join("screenshot_b.png").exists());
}

/// UTF-8でない確認入力は否定扱いで、次のファイルへ進む
#[tokio::test]
async fn test_non_utf8_answer_is_declined_and_run_continues() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("screenshot_a.png"), b"png").unwrap();
    std::fs::write(dir.path().join("screenshot_b.png"), b"png").unwrap();

    let mut h = harness(Some(vec!["chart"]), Some("chart"), [0xE9, b'\n', b'y', b'\n']);
    let summary = h.renamer.run(dir.path()).await.unwrap();

    assert_eq!(summary.candidates, 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.renamed, 1);
    assert!(dir.path().join("screenshot_a.png").exists());
    assert!(!dir.path().join("screenshot_b.png").exists());
    assert!(dir.path().join("chart.png").exists());
}

/// 存在しないフォルダは致命的エラー
#[tokio::test]
async fn test_missing_folder_is_fatal() {
    let mut h = harness(Some(vec!["x"]), Some("x"), "");
    let result = h.renamer.run(Path::new("/nonexistent/path/12345")).await;

    assert!(matches!(result, Err(TellMeMoreError::FolderNotFound(_))));
    assert!(h.visited.lock().unwrap().is_empty());
}
