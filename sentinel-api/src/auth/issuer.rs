//! トークン発行
//!
//! 固定の資格情報（admin/admin）を検証し、署名付きトークンを発行する。
//! 本物の資格情報検証は対象外のプレースホルダー実装。

use crate::auth::jwt::{self, Claims};
use crate::common::error::AuthError;
use crate::config::AuthConfig;
use serde::Serialize;

const ACCEPTED_USERNAME: &str = "admin";
const ACCEPTED_PASSWORD: &str = "admin";

/// 発行済みトークン
#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    /// JWTトークン
    pub token: String,
    /// トークン有効期限（秒）
    pub expires_in: u64,
}

/// トークン発行者
///
/// 署名鍵は構築時に`AuthConfig`として受け取り、グローバル状態は持たない。
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    config: AuthConfig,
}

impl TokenIssuer {
    /// 新しいTokenIssuerを作成
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// 資格情報を検証してトークンを発行する
    ///
    /// ユーザー名・パスワードが共に`admin`（大文字小文字を区別）の場合のみ成功する。
    pub fn issue(&self, username: &str, password: &str) -> Result<IssuedToken, AuthError> {
        if username != ACCEPTED_USERNAME || password != ACCEPTED_PASSWORD {
            return Err(AuthError::InvalidCredentials);
        }

        let token = jwt::create_jwt(username, &self.config.jwt_secret, self.config.token_ttl)?;

        Ok(IssuedToken {
            token,
            expires_in: self.config.token_ttl.as_secs(),
        })
    }

    /// 発行済みトークンを検証する
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        jwt::verify_jwt(token, &self.config.jwt_secret)
    }
}
