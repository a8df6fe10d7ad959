use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use domain::{ApprovalUpdate, CommentDetail, CommentDraft, CommentRow, Page};
use serde::Deserialize;
use services::{ServiceError, ServiceResult};

use crate::state::AppState;
use adapter::AdapterError;

#[derive(Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    adapter::PAGE_SIZE
}

/// 适配层的错误翻译成 HTTP：上游查无此物 404，其余都算上游问题 502
pub(crate) fn error_response(e: AdapterError) -> (StatusCode, String) {
    let status = match &e {
        AdapterError::Service(ServiceError::NotFound { .. }) => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_GATEWAY,
    };
    (status, e.to_string())
}

pub async fn list_comments(
    State(state): State<AppState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Page<CommentRow>>, (StatusCode, String)> {
    let page = state
        .crud
        .find(q.page, q.limit)
        .await
        .map_err(error_response)?;
    Ok(Json(page))
}

pub async fn get_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CommentDetail>, (StatusCode, String)> {
    let detail = state.crud.find_one(&id).await.map_err(error_response)?;
    Ok(Json(detail))
}

pub async fn post_comment(
    State(state): State<AppState>,
    Json(draft): Json<CommentDraft>,
) -> Result<Json<ServiceResult>, (StatusCode, String)> {
    let result = state.crud.insert(draft).await.map_err(error_response)?;
    Ok(Json(result))
}

pub async fn patch_approval(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<ApprovalUpdate>,
) -> Result<Json<ServiceResult>, (StatusCode, String)> {
    let result = state
        .crud
        .toggle_approval(&id, update)
        .await
        .map_err(error_response)?;
    Ok(Json(result))
}
