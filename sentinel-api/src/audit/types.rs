//! 監査ログの型定義

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 監査ログレコード（1リクエストにつき1件）
///
/// 永続化後は変更しない。`id`はストアが採番する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogRecord {
    /// レコードID（DB挿入後に設定）
    pub id: Option<i64>,
    /// 呼び出し元のネットワークアドレス
    pub source_address: String,
    /// レコード作成時刻（リクエスト処理完了時）
    pub timestamp: DateTime<Utc>,
    /// リクエストパス
    pub endpoint: String,
    /// HTTPメソッド
    pub method: String,
    /// 最終HTTPステータスコード
    pub status_code: u16,
    /// リクエスト到着からレスポンス完了までの時間（ミリ秒、0以上）
    pub response_time_ms: i64,
    /// User-Agentヘッダー
    pub user_agent: Option<String>,
    /// 疑わしいクエリ文字列（ヒューリスティックに該当した場合のみ）
    pub suspected_payload: Option<String>,
}
