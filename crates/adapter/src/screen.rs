//! 评论管理屏幕的具体配置：文案键、列定义、表单字段。
//! 宿主通过 descriptor 端点一次拿全。

use domain::{
    CellRender, ColumnSpec, CrudDescriptor, FieldKind, FieldRule, FormField, PaginatorPosition,
    SelectOption, TextKeys, Video, Visibility,
};

pub const ID_NAME: &str = "id";
pub const PAGE_SIZE: u32 = 50;

pub fn text_keys() -> TextKeys {
    TextKeys {
        create_record: "crud.videoComment.create.new.record".into(),
        update_record: "crud.videoComment.update.record".into(),
        delete_record: "crud.videoComment.delete.record".into(),
    }
}

pub fn table_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec {
            title_key: "forms.video".into(),
            field: "videoTitle".into(),
            render: CellRender::Text,
        },
        ColumnSpec {
            title_key: "forms.approved".into(),
            field: "approved".into(),
            render: CellRender::Bool {
                truthy: "SI".into(),
                falsy: "NO".into(),
            },
        },
        ColumnSpec {
            title_key: "forms.nick".into(),
            field: "nick".into(),
            render: CellRender::Text,
        },
        ColumnSpec {
            title_key: "forms.comment".into(),
            field: "comment".into(),
            render: CellRender::Text,
        },
    ]
}

fn required() -> FieldRule {
    FieldRule {
        required: true,
        message: "Cannot be empty!".into(),
    }
}

/// 表单字段。视频下拉框的选项来自当前的视频目录。
pub fn form_fields(catalog: &[Video]) -> Vec<FormField> {
    vec![
        FormField {
            name: ID_NAME.into(),
            label_key: "ID".into(),
            kind: FieldKind::Input,
            value: String::new(),
            hidden: Visibility::All,
            readonly: Visibility::All,
            rules: vec![],
            options: vec![],
            placeholder_key: "ID".into(),
        },
        FormField {
            name: "video".into(),
            label_key: "forms.video".into(),
            kind: FieldKind::Select,
            value: String::new(),
            hidden: Visibility::None,
            // 编辑时不许换视频
            readonly: Visibility::Edit,
            rules: vec![required()],
            options: catalog
                .iter()
                .map(|v| SelectOption {
                    value: v.id.clone(),
                    label: v.title.clone(),
                })
                .collect(),
            placeholder_key: "forms.video".into(),
        },
        FormField {
            name: "nick".into(),
            label_key: "forms.nick".into(),
            kind: FieldKind::Input,
            value: String::new(),
            hidden: Visibility::None,
            readonly: Visibility::None,
            rules: vec![required()],
            options: vec![],
            placeholder_key: "forms.nick".into(),
        },
        FormField {
            name: "comment".into(),
            label_key: "forms.comment".into(),
            kind: FieldKind::Input,
            value: String::new(),
            hidden: Visibility::None,
            readonly: Visibility::None,
            rules: vec![required()],
            options: vec![],
            placeholder_key: "forms.comment".into(),
        },
    ]
}

pub fn descriptor(catalog: &[Video]) -> CrudDescriptor {
    CrudDescriptor {
        text_keys: text_keys(),
        id_name: ID_NAME.into(),
        page_size: PAGE_SIZE,
        paginator: PaginatorPosition::Both,
        show_id_on_update: false,
        columns: table_columns(),
        form_fields: form_fields(catalog),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn catalog() -> Vec<Video> {
        vec![
            Video {
                id: "1".into(),
                title: "Cats".into(),
                extra: Map::new(),
            },
            Video {
                id: "2".into(),
                title: "Dogs".into(),
                extra: Map::new(),
            },
        ]
    }

    #[test]
    fn descriptor_carries_screen_defaults() {
        let d = descriptor(&catalog());
        assert_eq!(d.page_size, 50);
        assert_eq!(d.paginator, PaginatorPosition::Both);
        assert_eq!(d.id_name, "id");
        assert!(!d.show_id_on_update);
        assert_eq!(d.columns.len(), 4);
        assert_eq!(d.form_fields.len(), 4);
    }

    #[test]
    fn video_select_is_populated_from_the_catalog() {
        let fields = form_fields(&catalog());
        let video = fields.iter().find(|f| f.name == "video").unwrap();

        assert_eq!(video.kind, FieldKind::Select);
        assert_eq!(video.readonly, Visibility::Edit);
        assert!(video.rules.iter().any(|r| r.required));
        let labels: Vec<&str> = video.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Cats", "Dogs"]);
    }

    #[test]
    fn id_field_is_hidden_and_readonly_everywhere() {
        let fields = form_fields(&[]);
        let id = fields.iter().find(|f| f.name == "id").unwrap();
        assert!(id.hidden.on_add() && id.hidden.on_edit());
        assert!(id.readonly.on_add() && id.readonly.on_edit());
    }

    #[test]
    fn approved_column_maps_bool_to_display_text() {
        let columns = table_columns();
        let approved = columns.iter().find(|c| c.field == "approved").unwrap();
        assert_eq!(
            approved.render,
            CellRender::Bool {
                truthy: "SI".into(),
                falsy: "NO".into()
            }
        );
    }
}
