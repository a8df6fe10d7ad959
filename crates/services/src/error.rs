use thiserror::Error;

/// 上游调用的失败分类。适配层不做恢复，照原样往上抛。
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: String },

    #[error("upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode upstream response: {0}")]
    Decode(#[source] reqwest::Error),
}
