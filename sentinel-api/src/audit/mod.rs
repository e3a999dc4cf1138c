//! 監査ログシステム
//!
//! 全HTTPリクエストを`api_logs`テーブルに1件ずつ記録する。

/// 監査ログ型定義
pub mod types;

/// 疑わしいペイロードの簡易検出
pub mod heuristic;

/// リクエスト単位の監査スコープ
pub mod scope;

/// 監査ログミドルウェア
pub mod middleware;
