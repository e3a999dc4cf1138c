//! 認証API
//!
//! ログイン（固定資格情報でトークンを発行）

use super::error::AppError;
use crate::common::error::{AuthError, SentinelError};
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::{header, HeaderMap},
    Json,
};
use serde::{Deserialize, Serialize};

/// ログインパラメータ（クエリ文字列またはフォームボディ）
#[derive(Debug, Default, Deserialize)]
pub struct LoginParams {
    /// ユーザー名
    pub username: Option<String>,
    /// パスワード
    pub password: Option<String>,
}

impl LoginParams {
    /// 欠けている項目を`other`で補う（selfが優先）
    fn or(self, other: LoginParams) -> LoginParams {
        LoginParams {
            username: self.username.or(other.username),
            password: self.password.or(other.password),
        }
    }
}

/// ログインレスポンス
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// JWTトークン
    pub token: String,
}

fn is_form_body(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

fn parse_params(raw: &[u8]) -> Result<LoginParams, AppError> {
    serde_urlencoded::from_bytes(raw)
        .map_err(|e| AppError(SentinelError::BadRequest(format!("Malformed parameters: {}", e))))
}

fn required(value: Option<String>, name: &str) -> Result<String, AppError> {
    value.ok_or_else(|| AppError(SentinelError::BadRequest(format!("Missing parameter: {}", name))))
}

/// POST /api/auth/login - ログイン
///
/// # Returns
/// * `200 OK` - `{"token": "<jwt>"}`
/// * `400 Bad Request` - パラメータ欠落
/// * `401 Unauthorized` - 資格情報不一致
pub async fn login(
    State(app_state): State<AppState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<LoginResponse>, AppError> {
    let from_query = match query.as_deref() {
        Some(q) => parse_params(q.as_bytes())?,
        None => LoginParams::default(),
    };
    let from_body = if is_form_body(&headers) && !body.is_empty() {
        parse_params(&body)?
    } else {
        LoginParams::default()
    };

    let params = from_query.or(from_body);
    let username = required(params.username, "username")?;
    let password = required(params.password, "password")?;

    let issued = app_state
        .token_issuer
        .issue(&username, &password)
        .map_err(|e| match e {
            AuthError::InvalidCredentials => {
                tracing::warn!(username = %username, "Login failed: invalid credentials");
                AppError::from(e)
            }
            other => AppError(SentinelError::Internal(format!(
                "Failed to issue token: {}",
                other
            ))),
        })?;

    tracing::info!(username = %username, expires_in = issued.expires_in, "Login succeeded");

    Ok(Json(LoginResponse {
        token: issued.token,
    }))
}
