//! リクエスト単位の監査スコープ
//!
//! `enter`で開始時刻とリクエスト情報を確保し、`exit`で最終ステータスを
//! 受け取って`AuditLogRecord`を確定する。`exit`されずに破棄された場合
//! （クライアント切断などによるキャンセル）はレコードを生成しない。

use crate::audit::heuristic::detect_suspicious_payload;
use crate::audit::types::AuditLogRecord;
use crate::common::ip::normalize_socket_ip;
use axum::{
    extract::{ConnectInfo, Request},
    http::header,
};
use chrono::Utc;
use std::net::SocketAddr;
use std::time::Instant;
use tracing::debug;

/// 接続元アドレスが取得できない場合の値
pub const UNKNOWN_SOURCE: &str = "unknown";

/// 監査に必要なリクエスト情報
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFacts {
    /// 接続元アドレス
    pub source_address: String,
    /// リクエストパス（クエリ文字列を含まない）
    pub endpoint: String,
    /// HTTPメソッド
    pub method: String,
    /// User-Agentヘッダー
    pub user_agent: Option<String>,
    /// 生のクエリ文字列
    pub raw_query: Option<String>,
}

impl RequestFacts {
    /// リクエストから監査情報を取り出す
    ///
    /// 接続元はソケットのピアアドレスのみを使う。`X-Forwarded-For`等は参照しない。
    pub fn from_request(request: &Request) -> Self {
        let source_address = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| normalize_socket_ip(addr).to_string())
            .unwrap_or_else(|| UNKNOWN_SOURCE.to_string());

        let user_agent = request
            .headers()
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        Self {
            source_address,
            endpoint: request.uri().path().to_string(),
            method: request.method().to_string(),
            user_agent,
            raw_query: request.uri().query().map(str::to_string),
        }
    }
}

/// 1リクエストの監査スコープ
pub struct AuditScope {
    facts: RequestFacts,
    started: Instant,
    finished: bool,
}

impl AuditScope {
    /// スコープを開始する（処理前に呼ぶ）
    pub fn enter(facts: RequestFacts) -> Self {
        Self {
            facts,
            started: Instant::now(),
            finished: false,
        }
    }

    /// 最終ステータスでスコープを閉じ、レコードを確定する
    pub fn exit(mut self, status_code: u16) -> AuditLogRecord {
        let elapsed = self.started.elapsed();
        self.finished = true;
        let facts = std::mem::take(&mut self.facts);

        AuditLogRecord {
            id: None,
            source_address: facts.source_address,
            timestamp: Utc::now(),
            endpoint: facts.endpoint,
            method: facts.method,
            status_code,
            response_time_ms: i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX),
            user_agent: facts.user_agent,
            suspected_payload: detect_suspicious_payload(facts.raw_query.as_deref()),
        }
    }
}

impl Drop for AuditScope {
    fn drop(&mut self) {
        if !self.finished {
            debug!(
                method = %self.facts.method,
                path = %self.facts.endpoint,
                "request cancelled before completion; no audit record written"
            );
        }
    }
}
