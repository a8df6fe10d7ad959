use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use services::ServiceResult;

use super::comments::error_response;
use crate::state::AppState;

/// 删除是破坏性操作，只留给带管理 Token 的调用方
pub async fn delete_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<ServiceResult>, (StatusCode, String)> {
    let auth_header = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or((
            StatusCode::UNAUTHORIZED,
            "Missing Authorization header".to_string(),
        ))?;
    let expected_token = format!("Bearer {}", state.admin_token);
    if auth_header != expected_token {
        return Err((StatusCode::FORBIDDEN, "Invalid Admin Token".to_string()));
    }

    let result = state.crud.remove(&id).await.map_err(error_response)?;
    Ok(Json(result))
}
