//! Sentinel API Server
//!
//! ログインでJWTを発行し、保護されたデータエンドポイントを提供する。
//! 全リクエストは`api_logs`テーブルに監査記録される。

#![warn(missing_docs)]

/// 共通型定義（エラー、IP正規化）
pub mod common;

/// REST APIハンドラー
pub mod api;

/// データベースアクセス
pub mod db;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// 認証・認可機能
pub mod auth;

/// 監査ログシステム
pub mod audit;

/// CLIインターフェース
pub mod cli;

/// axumサーバー起動
pub mod server;

use std::sync::Arc;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// トークン発行者
    pub token_issuer: auth::issuer::TokenIssuer,
    /// 監査ログストア
    pub audit_store: Arc<dyn db::traits::AuditLogRepository>,
    /// データベース接続プール
    pub db_pool: sqlx::SqlitePool,
}

impl AppState {
    /// DB接続・マイグレーションを行い、AppStateを構築する
    pub async fn initialize(
        database_url: &str,
        auth_config: config::AuthConfig,
    ) -> Result<Self, common::error::SentinelError> {
        let db_pool = db::init_db_pool(database_url).await?;
        db::run_migrations(&db_pool).await?;

        Ok(Self {
            token_issuer: auth::issuer::TokenIssuer::new(auth_config),
            audit_store: Arc::new(db::audit_log::AuditLogStorage::new(db_pool.clone())),
            db_pool,
        })
    }
}
