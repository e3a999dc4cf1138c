//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use crate::common::error::{AuthError, SentinelError, StoreError};
use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub SentinelError);

impl From<SentinelError> for AppError {
    fn from(err: SentinelError) -> Self {
        AppError(err)
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError(SentinelError::Auth(err))
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError(SentinelError::Store(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // 詳細はログのみ。レスポンスにはexternal_message()を使う
        let status = self.0.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        }

        let payload = json!({
            "error": self.0.external_message()
        });

        (status, Json(payload)).into_response()
    }
}
