use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// RUST_LOG 未指定時のフィルタ
const DEFAULT_FILTER: &str = "info";

/// ログ出力を初期化（標準エラーへ出力、標準出力は対話用）
pub fn init_logger() {
    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter_layer)
        .init();
}
