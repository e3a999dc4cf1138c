//! Repository traitパターン定義
//!
//! 監査ログの永続化を抽象化し、ミドルウェアをストア実装から切り離す。

use async_trait::async_trait;

use crate::audit::types::AuditLogRecord;
use crate::common::error::StoreResult;

/// 監査ログの追記専用ストア
///
/// 実装は並行呼び出しに対して一意なIDを返さなければならない。
/// 更新・削除の操作は持たない。
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// レコードを永続化し、採番されたIDを返す
    async fn append(&self, record: &AuditLogRecord) -> StoreResult<i64>;
}
