//! Integration: 実ソケット経由の監査ログ記録
//!
//! login → data の一連の流れで、接続元アドレス・User-Agent・ステータスが
//! `api_logs`に1リクエスト1件で残ることを検証する。

use reqwest::StatusCode;
use serde_json::Value;

use crate::support::{
    app::{create_test_state, stored_records},
    http::spawn_server,
};

const TEST_USER_AGENT: &str = "sentinel-integration/1.0";

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(TEST_USER_AGENT)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_login_and_data_flow_is_audited_with_peer_address() {
    let (state, _dir) = create_test_state().await;
    let pool = state.db_pool.clone();
    let server = spawn_server(state).await;
    let client = client();

    let login = client
        .post(server.url("/api/auth/login?username=admin&password=admin"))
        .send()
        .await
        .unwrap();
    assert_eq!(login.status(), StatusCode::OK);
    let token = login.json::<Value>().await.unwrap()["token"]
        .as_str()
        .unwrap()
        .to_string();

    let data = client
        .get(server.url("/api/data"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(data.status(), StatusCode::OK);
    let body: Value = data.json().await.unwrap();
    assert_eq!(body["message"], "This is secured data from SentinelAI API.");

    let records = stored_records(&pool).await;
    assert_eq!(records.len(), 2);
    for record in &records {
        assert_eq!(record.source_address, "127.0.0.1");
        assert_eq!(record.user_agent.as_deref(), Some(TEST_USER_AGENT));
        assert!(record.response_time_ms >= 0);
    }
    assert_eq!(records[0].endpoint, "/api/auth/login");
    assert_eq!(records[1].endpoint, "/api/data");
    assert!(records[0].id < records[1].id);

    server.stop().await;
}

#[tokio::test]
async fn test_suspicious_query_is_recorded_verbatim() {
    let (state, _dir) = create_test_state().await;
    let pool = state.db_pool.clone();
    let server = spawn_server(state).await;
    let client = client();

    let response = client
        .get(server.url("/api/data?id=1;DROP--select*"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = client
        .get(server.url("/api/data?q=hello+world"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let records = stored_records(&pool).await;
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0].suspected_payload.as_deref(),
        Some("id=1;DROP--select*")
    );
    assert_eq!(records[1].suspected_payload, None);

    server.stop().await;
}

#[tokio::test]
async fn test_unknown_path_is_audited_as_404() {
    let (state, _dir) = create_test_state().await;
    let pool = state.db_pool.clone();
    let server = spawn_server(state).await;

    let response = client()
        .get(server.url("/does/not/exist"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let records = stored_records(&pool).await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].endpoint, "/does/not/exist");
    assert_eq!(records[0].status_code, 404);

    server.stop().await;
}

#[tokio::test]
async fn test_store_outage_does_not_change_responses() {
    let (state, _dir) = create_test_state().await;
    let pool = state.db_pool.clone();
    let server = spawn_server(state).await;
    let client = client();

    pool.close().await;

    let login = client
        .post(server.url("/api/auth/login?username=admin&password=admin"))
        .send()
        .await
        .unwrap();
    assert_eq!(login.status(), StatusCode::OK);
    let body: Value = login.json().await.unwrap();
    assert!(body["token"].is_string());

    let rejected = client
        .post(server.url("/api/auth/login?username=admin&password=nope"))
        .send()
        .await
        .unwrap();
    assert_eq!(rejected.status(), StatusCode::UNAUTHORIZED);
    let body: Value = rejected.json().await.unwrap();
    assert_eq!(body["error"], "Invalid credentials");

    server.stop().await;
}
