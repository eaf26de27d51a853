//! 構造化ログ初期化。
//! tracing クレートを使用し、JSON またはテキスト形式の構造化ログを出力する。

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// env のデフォルト値。
fn default_env() -> String {
    "dev".to_string()
}

/// format のデフォルト値。
fn default_format() -> String {
    "json".to_string()
}

/// LoggingConfig は構造化ログ出力の設定。
///
/// YAML または環境変数から serde でデシリアライズ可能。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 実行環境（dev / staging / prod）。
    #[serde(default = "default_env")]
    pub env: String,

    /// 出力形式（json / text）。
    #[serde(default = "default_format")]
    pub format: String,
}

impl LoggingConfig {
    pub fn new(env: &str, format: &str) -> Self {
        Self {
            env: env.to_string(),
            format: format.to_string(),
        }
    }

    /// 環境に対応するデフォルトのログフィルタを返す。
    ///
    /// - dev: debug
    /// - staging: info
    /// - それ以外: warn
    pub fn default_filter(&self) -> &'static str {
        match self.env.as_str() {
            "dev" => "debug",
            "staging" => "info",
            _ => "warn",
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env: default_env(),
            format: default_format(),
        }
    }
}

/// init_logging は tracing-subscriber を初期化する。
///
/// `RUST_LOG` が設定されている場合はそちらを優先する。
/// format が "text" の場合はプレーンテキスト出力、それ以外は JSON 出力。
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_filter()));

    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "text" {
        registry
            .with(fmt::layer().with_target(true))
            .init();
    } else {
        registry
            .with(fmt::layer().json().with_target(true))
            .init();
    }
}
