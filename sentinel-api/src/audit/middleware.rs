//! 監査ログミドルウェア
//!
//! 全HTTPリクエスト（404・401・パニックを含む）の終了時に1件の
//! `AuditLogRecord`を記録する。記録失敗はログに残すのみで、
//! レスポンスには影響させない。

use crate::audit::scope::{AuditScope, RequestFacts};
use crate::audit::types::AuditLogRecord;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use tracing::{trace, warn};

/// 監査ログミドルウェア
///
/// ルーター全体の最外層に配置し、リクエストごとに
/// `AuditScope`を開始・終了してストアへ書き込む。
/// 内側でパニックした場合は500として記録した後、パニックを再送出する。
pub async fn audit_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let scope = AuditScope::enter(RequestFacts::from_request(&request));

    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => {
            let record = scope.exit(response.status().as_u16());
            persist(&state, &record).await;
            response
        }
        Err(panic) => {
            let record = scope.exit(StatusCode::INTERNAL_SERVER_ERROR.as_u16());
            persist(&state, &record).await;
            std::panic::resume_unwind(panic)
        }
    }
}

/// レコードをストアに追記する（失敗はwarnログのみ）
async fn persist(state: &AppState, record: &AuditLogRecord) {
    if let Some(payload) = &record.suspected_payload {
        warn!(
            source = %record.source_address,
            path = %record.endpoint,
            payload = %payload,
            "suspicious query string detected"
        );
    }

    match state.audit_store.append(record).await {
        Ok(id) => trace!(
            id,
            method = %record.method,
            path = %record.endpoint,
            status = record.status_code,
            duration_ms = record.response_time_ms,
            "audit log record persisted"
        ),
        Err(e) => warn!(
            error = %e,
            method = %record.method,
            path = %record.endpoint,
            status = record.status_code,
            "Failed to persist audit log record"
        ),
    }
}
