use clap::Parser;
use tell_me_more::{cli, config, confirm, describer, error, logging, pipeline, suggester};
use cli::Cli;
use config::Config;
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // .env があれば読み込む
    dotenvy::dotenv().ok();
    logging::init_logger();

    let config = Config::load()?;

    println!("🔎 tell-me-more - 画像リネーム\n");

    let mut renamer = pipeline::Renamer::new(
        describer::from_config(&config),
        suggester::NameSuggester::from_config(&config),
        confirm::stdin_prompter(),
    );

    let summary = match renamer.run(&cli.directory).await {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!(error = %e, "処理を中断しました");
            return Err(e);
        }
    };

    println!(
        "\n✅ 完了: 対象 {}件 / リネーム {}件 / スキップ {}件 / 失敗 {}件",
        summary.candidates, summary.renamed, summary.skipped, summary.failed
    );

    Ok(())
}
