// 認証ミドルウェア（Bearer JWT）

use crate::api::error::AppError;
use crate::auth::issuer::TokenIssuer;
use crate::common::error::AuthError;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// AuthorizationヘッダーからBearerトークンを取り出す
fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AuthError::Jwt("Invalid Authorization header format".to_string()))
}

/// JWT認証ミドルウェア
///
/// 検証済みの`Claims`をrequest extensionsに格納して次に進む。
/// 失敗時は401と`{"error": ...}`を返す。
pub async fn jwt_auth_middleware(
    State(issuer): State<TokenIssuer>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let claims = extract_bearer_token(request.headers())
        .and_then(|token| issuer.verify(token))
        .map_err(|e| {
            tracing::warn!("JWT verification failed: {}", e);
            AppError::from(e).into_response()
        })?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
