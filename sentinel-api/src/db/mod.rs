//! データベースアクセス層
//!
//! SQLiteベースのデータ永続化

/// 監査ログストレージ
pub mod audit_log;

/// データベース接続とマイグレーション
pub mod migrations;

/// Repository traitパターン（テスタビリティ向上）
pub mod traits;

pub use migrations::{init_db_pool, run_migrations};
