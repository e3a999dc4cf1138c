//! Integration: 並行リクエスト時の監査ログ採番

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use sentinel_api::audit::types::AuditLogRecord;
use sentinel_api::db::audit_log::AuditLogStorage;
use sentinel_api::db::traits::AuditLogRepository;

use crate::support::{
    app::{create_test_state, stored_records},
    http::spawn_server,
};

#[tokio::test]
async fn test_concurrent_requests_each_get_one_record() {
    let (state, _dir) = create_test_state().await;
    let pool = state.db_pool.clone();
    let server = spawn_server(state).await;
    let client = reqwest::Client::new();

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let client = client.clone();
            let url = server.url(&format!("/api/data?page={}", i));
            tokio::spawn(async move { client.get(url).send().await.unwrap().status() })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), reqwest::StatusCode::UNAUTHORIZED);
    }

    let records = stored_records(&pool).await;
    assert_eq!(records.len(), 50);
    let ids: HashSet<i64> = records.iter().filter_map(|r| r.id).collect();
    assert_eq!(ids.len(), 50);

    server.stop().await;
}

#[tokio::test]
async fn test_hundred_concurrent_appends_on_file_database() {
    let (state, _dir) = create_test_state().await;
    let storage = Arc::new(AuditLogStorage::new(state.db_pool.clone()));

    let handles: Vec<_> = (0..100)
        .map(|i| {
            let storage = storage.clone();
            tokio::spawn(async move {
                let record = AuditLogRecord {
                    id: None,
                    source_address: format!("10.0.0.{}", i % 250),
                    timestamp: Utc::now(),
                    endpoint: "/api/data".to_string(),
                    method: "GET".to_string(),
                    status_code: 200,
                    response_time_ms: i,
                    user_agent: None,
                    suspected_payload: None,
                };
                storage.append(&record).await
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        let id = handle.await.unwrap().expect("append succeeds");
        assert!(ids.insert(id));
    }

    assert_eq!(ids.len(), 100);
    for id in &ids {
        assert!(storage.get_by_id(*id).await.unwrap().is_some());
    }
}
