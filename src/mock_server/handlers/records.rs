//! Custom object record endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;

/// Page size used when the request does not give a positive one.
const DEFAULT_PAGE_SIZE: usize = 10;

/// Largest page size the API honours.
const MAX_PAGE_SIZE: usize = 100;

/// Query parameters for listing records.
#[derive(Debug, Default, Deserialize)]
pub struct ListRecordsQuery {
    pub page_size: Option<i64>,
    pub page: Option<usize>,
}

/// Request body for creating or updating a record.
#[derive(Debug, Deserialize)]
pub struct RecordBody {
    pub data: Map<String, Value>,
}

fn not_found(message: String) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "code": "not_found",
            "message": message,
        })),
    )
        .into_response()
}

fn object_not_found(object_id: u64) -> Response {
    not_found(format!("No custom object found with id: {object_id}"))
}

fn record_not_found(object_id: u64, record_id: u64) -> Response {
    not_found(format!(
        "No record {record_id} found in custom object: {object_id}"
    ))
}

/// POST /objects/{id}/records
pub async fn create_record(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(object_id): Path<u64>,
    Json(body): Json<RecordBody>,
) -> Response {
    let mut state = state.write().await;

    match state.create_record(object_id, body.data) {
        Some(record) => (
            StatusCode::OK,
            Json(json!({ "custom_object": { "data": record } })),
        )
            .into_response(),
        None => object_not_found(object_id),
    }
}

/// GET /objects/{id}/records
pub async fn list_records(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(object_id): Path<u64>,
    Query(query): Query<ListRecordsQuery>,
) -> Response {
    let state = state.read().await;

    let Some(all_records) = state.list_records(object_id) else {
        return object_not_found(object_id);
    };

    let page_size = match query.page_size {
        Some(n) if n > 0 => usize::try_from(n).map_or(MAX_PAGE_SIZE, |n| n.min(MAX_PAGE_SIZE)),
        _ => DEFAULT_PAGE_SIZE,
    };
    let page = query.page.unwrap_or(1).max(1);

    // Apply pagination
    let start = (page - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(all_records.len());
    let has_more = end < all_records.len();

    let mut records: Vec<Value> = if start < all_records.len() {
        all_records[start..end]
            .iter()
            .map(|r| json!({ "data": r }))
            .collect()
    } else {
        vec![]
    };

    if has_more {
        if let Some(last) = records.last_mut() {
            last["next_page_link"] = Value::from(format!(
                "{}/objects/{}/records?page_size={}&page={}",
                state.base_url,
                object_id,
                page_size,
                page + 1
            ));
        }
    }

    (StatusCode::OK, Json(json!({ "records": records }))).into_response()
}

/// PUT /objects/{id}/records/{record_id}
pub async fn update_record(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((object_id, record_id)): Path<(u64, u64)>,
    Json(body): Json<RecordBody>,
) -> Response {
    let mut state = state.write().await;

    if state.get_object(object_id).is_none() {
        return object_not_found(object_id);
    }

    match state.update_record(object_id, record_id, body.data) {
        Some(record) => (
            StatusCode::OK,
            Json(json!({ "custom_object": { "data": record } })),
        )
            .into_response(),
        None => record_not_found(object_id, record_id),
    }
}

/// DELETE /objects/{id}/records/{record_id}
pub async fn delete_record(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((object_id, record_id)): Path<(u64, u64)>,
) -> Response {
    let mut state = state.write().await;

    if state.get_object(object_id).is_none() {
        return object_not_found(object_id);
    }

    match state.delete_record(object_id, record_id) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => record_not_found(object_id, record_id),
    }
}
