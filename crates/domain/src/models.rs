use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 上游视频记录（父表）。本系统只读，从不创建/修改/删除。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    // 上游可能带别的字段，原样保留
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    /// 外键：所属视频的 ID
    pub entity_id: String,
    pub nick: String,
    pub comment: String,
    pub approved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 列表行：评论加上冗余的视频标题。每次读取现算，从不落盘。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRow {
    #[serde(flatten)]
    pub comment: Comment,
    #[serde(rename = "videoTitle")]
    pub video_title: String,
}

/// 详情视图：编辑表单用，`video` 即评论的外键
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDetail {
    pub video: String,
    #[serde(rename = "videoTitle")]
    pub video_title: String,
    #[serde(flatten)]
    pub comment: Comment,
}

/// 新建表单的原始载荷，`video` 是表单辅助字段
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDraft {
    pub video: String,
    pub nick: String,
    pub comment: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 清洗后的创建载荷：`video` 已被换成 `entity_id`，类型上排除了混入的可能
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComment {
    pub entity_id: String,
    pub nick: String,
    pub comment: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ApprovalUpdate {
    pub approved: bool,
}

/// 上游和本服务统一的 `{data: [...]}` 信封
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_comment() -> Comment {
        Comment {
            id: "10".into(),
            entity_id: "1".into(),
            nick: "bob".into(),
            comment: "nice".into(),
            approved: false,
            created_at: None,
            extra: Map::new(),
        }
    }

    #[test]
    fn comment_row_flattens_and_renames_title() {
        let row = CommentRow {
            comment: sample_comment(),
            video_title: "Cats".into(),
        };

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "10",
                "entity_id": "1",
                "nick": "bob",
                "comment": "nice",
                "approved": false,
                "videoTitle": "Cats"
            })
        );
    }

    #[test]
    fn new_comment_never_serializes_a_video_field() {
        let payload = NewComment {
            entity_id: "1".into(),
            nick: "bob".into(),
            comment: "nice".into(),
            extra: Map::new(),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("video").is_none());
        assert_eq!(value["entity_id"], "1");
    }

    #[test]
    fn comment_keeps_unknown_upstream_fields() {
        let raw = json!({
            "id": "10",
            "entity_id": "1",
            "nick": "bob",
            "comment": "nice",
            "approved": true,
            "lang": "es"
        });

        let comment: Comment = serde_json::from_value(raw).unwrap();
        assert_eq!(comment.extra["lang"], "es");

        let back = serde_json::to_value(&comment).unwrap();
        assert_eq!(back["lang"], "es");
    }
}
