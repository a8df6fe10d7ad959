use axum::{extract::State, http::StatusCode, Json};
use domain::CrudDescriptor;

use super::comments::error_response;
use crate::state::AppState;

/// 宿主启动时拉一次的屏幕描述；视频下拉框用当前目录第一页填充
pub async fn get_descriptor(
    State(state): State<AppState>,
) -> Result<Json<CrudDescriptor>, (StatusCode, String)> {
    let catalog = state
        .crud
        .video_catalog(1, adapter::PAGE_SIZE)
        .await
        .map_err(error_response)?;
    Ok(Json(adapter::descriptor(&catalog.data)))
}
