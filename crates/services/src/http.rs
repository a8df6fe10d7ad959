use async_trait::async_trait;
use domain::{ApprovalUpdate, Comment, Envelope, NewComment, Page, Video};
use reqwest::{RequestBuilder, Response, StatusCode};

use crate::{CommentCollection, ServiceError, ServiceResult, VideoCollection};

/// 非 404 的失败统一映射成 Status
async fn check(resp: Response) -> Result<Response, ServiceError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ServiceError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(resp)
}

/// 按 ID 单查：404 专门映射成 NotFound，其余走 check
async fn fetch_one<T: serde::de::DeserializeOwned>(
    resp: Response,
    resource: &'static str,
    id: &str,
) -> Result<T, ServiceError> {
    if resp.status() == StatusCode::NOT_FOUND {
        return Err(ServiceError::NotFound {
            resource,
            id: id.to_string(),
        });
    }
    let envelope: Envelope<T> = check(resp)
        .await?
        .json()
        .await
        .map_err(ServiceError::Decode)?;
    Ok(envelope.data)
}

async fn fetch_result(resp: Response, resource: &'static str, id: &str) -> Result<ServiceResult, ServiceError> {
    if resp.status() == StatusCode::NOT_FOUND {
        return Err(ServiceError::NotFound {
            resource,
            id: id.to_string(),
        });
    }
    check(resp)
        .await?
        .json()
        .await
        .map_err(ServiceError::Decode)
}

#[derive(Clone)]
pub struct HttpVideoService {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl HttpVideoService {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
            client: reqwest::Client::new(),
        }
    }

    fn authed(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(t) => req.bearer_auth(t),
            None => req,
        }
    }
}

#[async_trait]
impl VideoCollection for HttpVideoService {
    #[tracing::instrument(skip(self))]
    async fn list_videos(&self, page: u32, limit: u32) -> Result<Page<Video>, ServiceError> {
        let req = self
            .client
            .get(format!("{}/videos", self.base_url))
            .query(&[("page", page), ("limit", limit)]);
        let resp = self.authed(req).send().await?;
        check(resp)
            .await?
            .json()
            .await
            .map_err(ServiceError::Decode)
    }

    #[tracing::instrument(skip(self))]
    async fn get_video(&self, id: &str) -> Result<Video, ServiceError> {
        let req = self.client.get(format!("{}/videos/{}", self.base_url, id));
        let resp = self.authed(req).send().await?;
        fetch_one(resp, "video", id).await
    }
}

#[derive(Clone)]
pub struct HttpCommentService {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl HttpCommentService {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
            client: reqwest::Client::new(),
        }
    }

    fn authed(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(t) => req.bearer_auth(t),
            None => req,
        }
    }
}

#[async_trait]
impl CommentCollection for HttpCommentService {
    #[tracing::instrument(skip(self))]
    async fn list_by_video(&self, video_id: &str) -> Result<Page<Comment>, ServiceError> {
        let req = self
            .client
            .get(format!("{}/comments", self.base_url))
            .query(&[("entity_id", video_id)]);
        let resp = self.authed(req).send().await?;
        check(resp)
            .await?
            .json()
            .await
            .map_err(ServiceError::Decode)
    }

    #[tracing::instrument(skip(self))]
    async fn get_comment(&self, id: &str) -> Result<Comment, ServiceError> {
        let req = self.client.get(format!("{}/comments/{}", self.base_url, id));
        let resp = self.authed(req).send().await?;
        fetch_one(resp, "comment", id).await
    }

    #[tracing::instrument(skip(self, payload))]
    async fn create_comment(&self, payload: &NewComment) -> Result<ServiceResult, ServiceError> {
        let req = self
            .client
            .post(format!("{}/comments", self.base_url))
            .json(payload);
        let resp = self.authed(req).send().await?;
        check(resp)
            .await?
            .json()
            .await
            .map_err(ServiceError::Decode)
    }

    #[tracing::instrument(skip(self))]
    async fn update_status(
        &self,
        id: &str,
        update: &ApprovalUpdate,
    ) -> Result<ServiceResult, ServiceError> {
        let req = self
            .client
            .patch(format!("{}/comments/{}/status", self.base_url, id))
            .json(update);
        let resp = self.authed(req).send().await?;
        fetch_result(resp, "comment", id).await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_comment(&self, id: &str) -> Result<ServiceResult, ServiceError> {
        let req = self
            .client
            .delete(format!("{}/comments/{}", self.base_url, id));
        let resp = self.authed(req).send().await?;
        fetch_result(resp, "comment", id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let svc = HttpVideoService::new("http://videos.local/", None);
        assert_eq!(svc.base_url, "http://videos.local");

        let svc = HttpCommentService::new("http://comments.local", None);
        assert_eq!(svc.base_url, "http://comments.local");
    }
}
