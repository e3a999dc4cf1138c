//! 保護されたデータAPI

use axum::Json;
use serde::Serialize;

/// 固定メッセージ
pub const SECURED_MESSAGE: &str = "This is secured data from SentinelAI API.";

/// データレスポンス
#[derive(Debug, Serialize)]
pub struct DataResponse {
    /// メッセージ本文
    pub message: &'static str,
}

/// GET /api/data - 保護されたデータ（JWT必須）
pub async fn get_data() -> Json<DataResponse> {
    Json(DataResponse {
        message: SECURED_MESSAGE,
    })
}
