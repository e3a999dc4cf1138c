//! 監査ログストレージ（SQLite, `api_logs`テーブル）

use crate::audit::types::AuditLogRecord;
use crate::common::error::{StoreError, StoreResult};
use crate::db::traits::AuditLogRepository;
use async_trait::async_trait;
use sqlx::SqlitePool;

/// 監査ログのDB操作（追記と読み出しのみ）
#[derive(Clone)]
pub struct AuditLogStorage {
    pool: SqlitePool,
}

/// sqlx::FromRow用の行構造体
#[derive(Debug, sqlx::FromRow)]
struct ApiLogRow {
    id: i64,
    ip_address: String,
    timestamp: String,
    endpoint: String,
    method: String,
    status_code: i64,
    response_time: i64,
    user_agent: Option<String>,
    suspected_payload: Option<String>,
}

impl TryFrom<ApiLogRow> for AuditLogRecord {
    type Error = StoreError;

    fn try_from(row: ApiLogRow) -> Result<Self, Self::Error> {
        let timestamp = chrono::DateTime::parse_from_rfc3339(&row.timestamp)
            .map(|dt| dt.with_timezone(&chrono::Utc))
            .map_err(|e| StoreError::InvalidRecord(format!("Failed to parse timestamp: {}", e)))?;

        let status_code = u16::try_from(row.status_code)
            .map_err(|e| StoreError::InvalidRecord(format!("Invalid status_code: {}", e)))?;

        Ok(AuditLogRecord {
            id: Some(row.id),
            source_address: row.ip_address,
            timestamp,
            endpoint: row.endpoint,
            method: row.method,
            status_code,
            response_time_ms: row.response_time,
            user_agent: row.user_agent,
            suspected_payload: row.suspected_payload,
        })
    }
}

impl AuditLogStorage {
    /// 新しいAuditLogStorageを作成
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 監査ログを1件挿入し、採番されたIDを返す
    pub async fn insert(&self, record: &AuditLogRecord) -> StoreResult<i64> {
        let result = sqlx::query(
            r#"INSERT INTO api_logs (
                ip_address, timestamp, endpoint, method, status_code,
                response_time, user_agent, suspected_payload
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&record.source_address)
        .bind(record.timestamp.to_rfc3339())
        .bind(&record.endpoint)
        .bind(&record.method)
        .bind(i64::from(record.status_code))
        .bind(record.response_time_ms.max(0))
        .bind(&record.user_agent)
        .bind(&record.suspected_payload)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Database(format!("Failed to insert audit log: {}", e)))?;

        Ok(result.last_insert_rowid())
    }

    /// IDで監査ログを取得
    pub async fn get_by_id(&self, id: i64) -> StoreResult<Option<AuditLogRecord>> {
        let row = sqlx::query_as::<_, ApiLogRow>(
            "SELECT id, ip_address, timestamp, endpoint, method, status_code, \
             response_time, user_agent, suspected_payload \
             FROM api_logs WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Database(format!("Failed to get audit log: {}", e)))?;

        row.map(AuditLogRecord::try_from).transpose()
    }

    /// 保存済みレコード数を取得
    pub async fn count(&self) -> StoreResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM api_logs")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::Database(format!("Failed to count audit logs: {}", e)))
    }

    /// 保存済みレコードのID一覧（昇順）
    pub async fn list_ids(&self) -> StoreResult<Vec<i64>> {
        sqlx::query_scalar::<_, i64>("SELECT id FROM api_logs ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::Database(format!("Failed to list audit log ids: {}", e)))
    }
}

#[async_trait]
impl AuditLogRepository for AuditLogStorage {
    async fn append(&self, record: &AuditLogRecord) -> StoreResult<i64> {
        self.insert(record).await
    }
}
