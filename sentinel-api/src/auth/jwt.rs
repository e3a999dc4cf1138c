// JWT生成と検証（jsonwebtoken実装）

use crate::common::error::AuthError;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// JWTクレーム
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// ユーザー名（JWT sub claim）
    pub sub: String,
    /// 発行時刻（UNIX秒）
    pub iat: usize,
    /// 有効期限（UNIX秒）
    pub exp: usize,
}

/// JWTトークンを生成（HS256）
///
/// # Arguments
/// * `subject` - トークンに埋め込むユーザー名
/// * `secret` - 署名鍵
/// * `ttl` - 有効期間
///
/// # Returns
/// * `Ok(String)` - JWTトークン（3つのドット区切り部分）
/// * `Err(AuthError)` - 生成失敗
pub fn create_jwt(subject: &str, secret: &str, ttl: Duration) -> Result<String, AuthError> {
    let now = Utc::now();
    let ttl = chrono::Duration::from_std(ttl)
        .map_err(|e| AuthError::Jwt(format!("Invalid token lifetime: {}", e)))?;
    let expiration = now
        .checked_add_signed(ttl)
        .ok_or_else(|| AuthError::Jwt("Failed to calculate expiration time".to_string()))?;

    let claims = Claims {
        sub: subject.to_string(),
        iat: now.timestamp() as usize,
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::Jwt(format!("Failed to create JWT: {}", e)))
}

/// JWTトークンを検証
///
/// 署名と有効期限を検証し、クレームを返す。
pub fn verify_jwt(token: &str, secret: &str) -> Result<Claims, AuthError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AuthError::Jwt(format!("Failed to verify JWT: {}", e)))
}
