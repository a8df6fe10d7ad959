use std::sync::Arc;

use domain::{ApprovalUpdate, CommentDetail, CommentDraft, CommentRow, NewComment, Page, Video};
use futures::future::try_join_all;
use services::{CommentCollection, ServiceError, ServiceResult, VideoCollection};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum AdapterError {
    /// 评论的外键落在当前视频分页窗口之外，标题无从查起
    #[error("comment {comment_id} references video {video_id} outside the fetched page")]
    UnresolvedVideo {
        comment_id: String,
        video_id: String,
    },

    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// 评论资源适配器：把通用 CRUD 宿主的五个操作翻译成对
/// 视频/评论两个集合服务的调用。无本地状态，无缓存，无重试。
pub struct CommentCrud {
    videos: Arc<dyn VideoCollection>,
    comments: Arc<dyn CommentCollection>,
}

impl CommentCrud {
    pub fn new(videos: Arc<dyn VideoCollection>, comments: Arc<dyn CommentCollection>) -> Self {
        Self { videos, comments }
    }

    /// 列表：取一页视频，并发取每个视频下的全部评论（fan-out/fan-in，
    /// 任一子请求失败则整体失败），展平后逐条补上视频标题。
    /// 输出顺序 = 视频页序 × 各视频内服务返回序，不另行排序。
    pub async fn find(&self, page: u32, limit: u32) -> Result<Page<CommentRow>, AdapterError> {
        let videos = self.videos.list_videos(page, limit).await?;

        let per_video = try_join_all(
            videos
                .data
                .iter()
                .map(|v| self.comments.list_by_video(&v.id)),
        )
        .await?;

        let mut rows = Vec::new();
        for comments in per_video {
            for comment in comments.data {
                let title = lookup_title(&videos.data, &comment.entity_id).ok_or_else(|| {
                    AdapterError::UnresolvedVideo {
                        comment_id: comment.id.clone(),
                        video_id: comment.entity_id.clone(),
                    }
                })?;
                rows.push(CommentRow {
                    comment,
                    video_title: title,
                });
            }
        }

        debug!(videos = videos.data.len(), rows = rows.len(), "assembled comment listing");
        Ok(Page { data: rows })
    }

    /// 详情：先查评论再查它引用的视频，两步有数据依赖，只能串行。
    pub async fn find_one(&self, id: &str) -> Result<CommentDetail, AdapterError> {
        let comment = self.comments.get_comment(id).await?;
        let video = self.videos.get_video(&comment.entity_id).await?;

        Ok(CommentDetail {
            video: video.id,
            video_title: video.title,
            comment,
        })
    }

    /// 新建：先确认所选视频存在（查不到就中止），再提交清洗后的载荷。
    /// 载荷类型上只有 entity_id，表单辅助字段 `video` 不可能混进去。
    pub async fn insert(&self, draft: CommentDraft) -> Result<ServiceResult, AdapterError> {
        let video = self.videos.get_video(&draft.video).await?;

        let payload = NewComment {
            entity_id: video.id,
            nick: draft.nick,
            comment: draft.comment,
            extra: draft.extra,
        };

        Ok(self.comments.create_comment(&payload).await?)
    }

    /// 审核开关：直接透传，期望值由调用方给（界面传当前显示值的反）。
    /// 不读旧值，不留任何调用间状态。
    pub async fn toggle_approval(
        &self,
        id: &str,
        update: ApprovalUpdate,
    ) -> Result<ServiceResult, AdapterError> {
        Ok(self.comments.update_status(id, &update).await?)
    }

    pub async fn remove(&self, id: &str) -> Result<ServiceResult, AdapterError> {
        Ok(self.comments.delete_comment(id).await?)
    }

    /// 表单里视频下拉框的数据源（descriptor 端点用）
    pub async fn video_catalog(&self, page: u32, limit: u32) -> Result<Page<Video>, AdapterError> {
        Ok(self.videos.list_videos(page, limit).await?)
    }
}

fn lookup_title(videos: &[Video], entity_id: &str) -> Option<String> {
    videos
        .iter()
        .find(|v| v.id == entity_id)
        .map(|v| v.title.clone())
}
