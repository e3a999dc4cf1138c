//! ロギング初期化ユーティリティ
//!
//! `SENTINEL_LOG_LEVEL`（未設定時は`RUST_LOG`、さらに`info`）でフィルタを決め、
//! `SENTINEL_LOG_FORMAT=json`でJSON出力に切り替える。

use crate::config::get_env;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// 人間向けテキスト
    Text,
    /// 1行1JSON
    Json,
}

impl LogFormat {
    /// 環境変数から出力形式を決定する
    pub fn from_env() -> Self {
        match get_env("SENTINEL_LOG_FORMAT") {
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// フィルタ指定文字列を決定する
pub fn filter_directive() -> String {
    get_env("SENTINEL_LOG_LEVEL")
        .or_else(|| get_env("RUST_LOG"))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// グローバルなtracing subscriberを設定する
pub fn init() -> anyhow::Result<()> {
    let directive = filter_directive();
    let env_filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("Invalid log filter '{}': {}, falling back to info", directive, e);
        EnvFilter::new(DEFAULT_FILTER)
    });

    match LogFormat::from_env() {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json())
            .try_init()?,
        LogFormat::Text => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer())
            .try_init()?,
    }

    Ok(())
}
