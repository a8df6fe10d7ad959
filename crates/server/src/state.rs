use adapter::CommentCrud;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub crud: Arc<CommentCrud>,
    pub admin_token: String,
}
