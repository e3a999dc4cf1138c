//! データベース接続とマイグレーション

use crate::common::error::StoreError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use std::path::Path;
use std::str::FromStr;

/// SQLiteファイルの親ディレクトリを作成する
///
/// `sqlite::memory:` のような特殊指定は対象外。
fn ensure_parent_dir(database_url: &str) -> Result<(), StoreError> {
    let Some(path) = database_url.strip_prefix("sqlite:") else {
        return Ok(());
    };
    if path.starts_with(':') {
        return Ok(());
    }

    // `sqlite://` 形式とクエリパラメータを除去
    let normalized = path.trim_start_matches("//");
    let path_without_params = normalized.split('?').next().unwrap_or(normalized);
    if let Some(parent) = Path::new(path_without_params).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::Database(format!(
                    "Failed to create database directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}

/// SQLiteデータベース接続プールを作成
///
/// # Arguments
/// * `database_url` - データベースURL（例: "sqlite:data/sentinel.db"）
///
/// ファイルが存在しない場合は作成する。
pub async fn init_db_pool(database_url: &str) -> Result<SqlitePool, StoreError> {
    ensure_parent_dir(database_url)?;

    let connect_options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| StoreError::Database(format!("Invalid database URL: {}", e)))?
        .create_if_missing(true);

    SqlitePool::connect_with(connect_options)
        .await
        .map_err(|e| StoreError::Database(format!("Failed to connect to database: {}", e)))
}

/// マイグレーションを実行（sqlx::migrate!マクロを使用）
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StoreError> {
    tracing::info!("Running database migrations");

    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| StoreError::Database(format!("Failed to run migrations: {}", e)))?;

    tracing::info!("Database migrations completed successfully");
    Ok(())
}
