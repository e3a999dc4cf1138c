//! serve サブコマンド
//!
//! APIサーバーを起動します。

use crate::config::{AuthConfig, ServerConfig};
use clap::Args;
use tracing::info;

/// serve サブコマンドの引数
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(short, long, default_value = "8080", env = "SENTINEL_PORT")]
    pub port: u16,

    /// Bind address
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "SENTINEL_HOST")]
    pub host: String,
}

impl ServeArgs {
    /// 引数で環境変数由来の設定を上書きする
    pub fn apply(self, mut config: ServerConfig) -> ServerConfig {
        config.host = self.host;
        config.port = self.port;
        config
    }
}

/// 指定した設定でサーバーを起動する
pub async fn execute(config: ServerConfig) -> anyhow::Result<()> {
    info!(
        host = %config.host,
        port = config.port,
        database_url = %config.database_url,
        "Starting Sentinel API"
    );

    let state = crate::AppState::initialize(&config.database_url, AuthConfig::from_env()?).await?;
    crate::server::run(state, &config.bind_addr()).await
}
