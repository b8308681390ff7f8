use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tell-me-more", version)]
#[command(about = "スクリーンショット・DALL-E画像を内容に応じた名前にリネーム", long_about = None)]
pub struct Cli {
    /// 検索するフォルダのパス
    #[arg(required = true)]
    pub directory: PathBuf,
}
