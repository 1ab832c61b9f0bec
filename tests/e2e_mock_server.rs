//! E2E tests using the mock Freshservice server.
//!
//! These tests exercise full record workflows against the mock server,
//! testing realistic scenarios rather than individual endpoints.

#![cfg(feature = "test-server")]

use freshservice::mock_server::{MockServer, MockState, ASSETS_OBJECT_ID, VENDORS_OBJECT_ID};
use freshservice::{
    CreateCustomObjectRecordRequest, CustomObjectRecordClient, CustomObjectRecordMetadata,
    FreshserviceClient, FreshserviceError, ListCustomObjectRecordsResponse, Transport,
    UpdateCustomObjectRecordRequest,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Asset {
    name: String,
    department: String,
    #[serde(flatten)]
    meta: CustomObjectRecordMetadata,
}

fn asset(name: &str, department: &str) -> Asset {
    Asset {
        name: name.to_string(),
        department: department.to_string(),
        meta: CustomObjectRecordMetadata::default(),
    }
}

fn client_for(server: &MockServer) -> FreshserviceClient {
    FreshserviceClient::new("test-key", server.url()).unwrap()
}

// =============================================================================
// Server Lifecycle Tests
// =============================================================================

#[tokio::test]
async fn test_server_starts_on_random_port() {
    let server1 = MockServer::start().await;
    let server2 = MockServer::start().await;

    // Both servers should have different URLs
    assert_ne!(server1.url(), server2.url());

    server1.shutdown().await;
    server2.shutdown().await;
}

#[tokio::test]
async fn test_server_shutdown_is_clean() {
    let server = MockServer::start().await;
    let url = server.url().to_string();

    server.shutdown().await;

    // After shutdown, server should not respond
    let client = reqwest::Client::new();
    let result = client.get(format!("{}/health", url)).send().await;

    assert!(result.is_err());
}

// =============================================================================
// Record Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_record_lifecycle_workflow() {
    let server = MockServer::start().await;
    let records = CustomObjectRecordClient::<Asset>::new(client_for(&server));

    // Step 1: Create a record in the empty object
    let created = records
        .create(
            VENDORS_OBJECT_ID,
            CreateCustomObjectRecordRequest::new(asset("Acme Supplies", "Procurement")),
        )
        .await
        .expect("Failed to create record");

    let record = created.custom_object.data;
    assert_eq!(record.name, "Acme Supplies");
    let display_id = record.meta.display_id.expect("display id assigned");
    assert!(record.meta.created_at.is_some());

    // Step 2: It shows up in the listing
    let page = records.list(VENDORS_OBJECT_ID, 0).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page.records[0].data.meta.display_id, Some(display_id));

    // Step 3: Update it
    let updated = records
        .update(
            VENDORS_OBJECT_ID,
            display_id,
            UpdateCustomObjectRecordRequest::new(asset("Acme Supplies Ltd", "Procurement")),
        )
        .await
        .expect("Failed to update record");
    assert_eq!(updated.custom_object.data.name, "Acme Supplies Ltd");
    assert_eq!(updated.custom_object.data.meta.display_id, Some(display_id));

    // Step 4: Delete it
    records
        .delete(VENDORS_OBJECT_ID, display_id)
        .await
        .expect("Failed to delete record");

    let page = records.list(VENDORS_OBJECT_ID, 0).await.unwrap();
    assert!(page.is_empty());

    server.shutdown().await;
}

#[tokio::test]
async fn test_create_round_trips_payload() {
    let server = MockServer::start().await;
    let records = CustomObjectRecordClient::<Asset>::new(client_for(&server));

    let sent = asset("Keyboard", "IT");
    let created = records
        .create(ASSETS_OBJECT_ID, CreateCustomObjectRecordRequest::new(sent.clone()))
        .await
        .unwrap();

    let received = created.custom_object.data;
    assert_eq!(received.name, sent.name);
    assert_eq!(received.department, sent.department);

    server.shutdown().await;
}

#[tokio::test]
async fn test_manual_pagination_follows_next_page_link() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    let records = CustomObjectRecordClient::<Asset>::new(client.clone());

    // Three fixture records, two per page.
    let first = records.list(ASSETS_OBJECT_ID, 2).await.unwrap();
    assert_eq!(first.len(), 2);
    let next = first.next_page().expect("first page links to the next").clone();
    assert_eq!(next.query_pairs().find(|(k, _)| k == "page_size").unwrap().1, "2");

    // The caller follows the link; the record client never traverses pages.
    let second: ListCustomObjectRecordsResponse<Asset> = client.get(next.as_str()).await.unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second.records[0].data.name, "Desk");
    assert!(second.next_page().is_none());

    server.shutdown().await;
}

#[tokio::test]
async fn test_list_page_size_limits_results() {
    let server = MockServer::start().await;
    let records = CustomObjectRecordClient::<Asset>::new(client_for(&server));

    let page = records.list(ASSETS_OBJECT_ID, 1).await.unwrap();
    assert_eq!(page.len(), 1);
    assert!(page.next_page().is_some());

    let page = records.list(ASSETS_OBJECT_ID, 100).await.unwrap();
    assert_eq!(page.len(), 3);
    assert!(page.next_page().is_none());

    server.shutdown().await;
}

#[tokio::test]
async fn test_list_huge_page_size_is_capped() {
    let server = MockServer::start().await;
    let records = CustomObjectRecordClient::<Asset>::new(client_for(&server));

    let page = records.list(ASSETS_OBJECT_ID, i64::MAX).await.unwrap();
    assert_eq!(page.len(), 3);
    assert!(page.next_page().is_none());

    server.shutdown().await;
}

// =============================================================================
// Error Handling Tests
// =============================================================================

#[tokio::test]
async fn test_update_missing_record_is_not_found() {
    let server = MockServer::start().await;
    let records = CustomObjectRecordClient::<Asset>::new(client_for(&server));

    let err = records
        .update(
            ASSETS_OBJECT_ID,
            999,
            UpdateCustomObjectRecordRequest::new(asset("Ghost", "None")),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        FreshserviceError::ApiError {
            status_code: Some(404),
            ..
        }
    ));

    server.shutdown().await;
}

#[tokio::test]
async fn test_delete_twice_fails_second_time() {
    let server = MockServer::start().await;
    let records = CustomObjectRecordClient::<Asset>::new(client_for(&server));

    records.delete(ASSETS_OBJECT_ID, 1).await.unwrap();
    let err = records.delete(ASSETS_OBJECT_ID, 1).await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(server.state().read().await.list_records(ASSETS_OBJECT_ID).unwrap().len(), 2);

    server.shutdown().await;
}

#[tokio::test]
async fn test_unknown_object_is_not_found() {
    let server = MockServer::start_empty().await;
    let records = CustomObjectRecordClient::<serde_json::Value>::new(client_for(&server));

    let err = records
        .create(5, CreateCustomObjectRecordRequest::new(json!({"name": "x"})))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        FreshserviceError::ApiError {
            status_code: Some(404),
            ..
        }
    ));

    server.shutdown().await;
}

#[tokio::test]
async fn test_state_changes_are_visible_to_client() {
    let server = MockServer::with_state(MockState::new().with_object(3, "Licenses")).await;
    let records = CustomObjectRecordClient::<serde_json::Value>::new(client_for(&server));

    {
        let state = server.state();
        let mut state = state.write().await;
        let mut fields = serde_json::Map::new();
        fields.insert("name".to_string(), json!("Office"));
        state.create_record(3, fields);
    }

    let page = records.list(3, 0).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page.records[0].data["name"], "Office");

    server.shutdown().await;
}
