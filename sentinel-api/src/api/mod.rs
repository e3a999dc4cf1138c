//! REST APIハンドラー
//!
//! ルーター構成（外側から）: TraceLayer → 監査ミドルウェア → ルーティング →
//! `/api/data`のみJWT認証。監査は最外層に近いため、401や404も記録される。

use crate::audit::middleware::audit_middleware;
use crate::auth::middleware::jwt_auth_middleware;
use crate::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// 認証API（ログイン）
pub mod auth;

/// 保護されたデータAPI
pub mod data;

/// APIエラーレスポンス型
pub mod error;

/// アプリケーションのRouterを構築する
pub fn create_app(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/api/data", get(data::get_data))
        .route_layer(middleware::from_fn_with_state(
            state.token_issuer.clone(),
            jwt_auth_middleware,
        ));

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .merge(protected_routes)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            audit_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
