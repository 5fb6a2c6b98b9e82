// 構造化ログの初期化
//
// ログは標準エラーへ出力し、コマンドの標準出力と混ざらないようにする。

use crate::config::{Config, LogFormat, LogLevel};
use tracing::Level;

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

/// 設定に従ってグローバルなサブスクライバーを設定する
///
/// 既に設定済みの場合は何もしない（テストから複数回呼ばれても良い）。
pub fn init(config: &Config) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(Level::from(config.log_level))
        .with_target(false)
        .with_writer(std::io::stderr);

    let _ = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
}
