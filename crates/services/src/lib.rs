mod error;
mod http;

pub use error::ServiceError;
pub use http::{HttpCommentService, HttpVideoService};

use async_trait::async_trait;
use domain::{ApprovalUpdate, Comment, NewComment, Page, Video};

/// 变更操作的上游响应，原样透传给调用方
pub type ServiceResult = serde_json::Value;

/// 视频集合服务。本系统对它只读。
#[async_trait]
pub trait VideoCollection: Send + Sync {
    async fn list_videos(&self, page: u32, limit: u32) -> Result<Page<Video>, ServiceError>;
    async fn get_video(&self, id: &str) -> Result<Video, ServiceError>;
}

/// 评论集合服务：按视频列出、单查、创建、改审核状态、删除。
#[async_trait]
pub trait CommentCollection: Send + Sync {
    async fn list_by_video(&self, video_id: &str) -> Result<Page<Comment>, ServiceError>;
    async fn get_comment(&self, id: &str) -> Result<Comment, ServiceError>;
    async fn create_comment(&self, payload: &NewComment) -> Result<ServiceResult, ServiceError>;
    async fn update_status(
        &self,
        id: &str,
        update: &ApprovalUpdate,
    ) -> Result<ServiceResult, ServiceError>;
    async fn delete_comment(&self, id: &str) -> Result<ServiceResult, ServiceError>;
}
