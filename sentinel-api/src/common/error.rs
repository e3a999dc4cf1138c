//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! `SentinelError`は`status_code()`と`external_message()`を提供し、
//! APIレイヤーで`{"error": ...}`形式のレスポンスに変換される。

use axum::http::StatusCode;
use thiserror::Error;

/// 認証エラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// ユーザー名またはパスワードが一致しない
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Authorizationヘッダーが存在しない
    #[error("Missing Authorization header")]
    MissingToken,

    /// JWTの生成・検証エラー
    #[error("JWT error: {0}")]
    Jwt(String),
}

/// 監査ログストアのエラー
#[derive(Debug, Error)]
pub enum StoreError {
    /// データベースエラー（接続不可・書き込み失敗など）
    #[error("Database error: {0}")]
    Database(String),

    /// 保存済みレコードの復元に失敗
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

/// sentinel-api error type
#[derive(Debug, Error)]
pub enum SentinelError {
    /// Authentication error
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Audit log store error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Bad request (missing parameter, malformed body)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SentinelError {
    /// Returns a safe error message for external clients.
    ///
    /// Full error details go to the server log via `Display`; only this
    /// message is written to HTTP responses.
    pub fn external_message(&self) -> String {
        match self {
            Self::Auth(AuthError::InvalidCredentials) => "Invalid credentials".to_string(),
            Self::Auth(AuthError::MissingToken) => "Missing Authorization header".to_string(),
            Self::Auth(AuthError::Jwt(_)) => "Invalid token".to_string(),
            Self::Store(_) => "Database error".to_string(),
            Self::Config(_) => "Server misconfigured".to_string(),
            Self::BadRequest(msg) => msg.clone(),
            Self::Internal(_) => "Internal server error".to_string(),
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Result alias used by the store layer
pub type StoreResult<T> = Result<T, StoreError>;
