//! CRUD 屏幕的声明式配置：表格列、表单字段、提示文案。
//! 纯数据，不绑定任何 UI 框架，宿主自己决定怎么渲染。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextKeys {
    pub create_record: String,
    pub update_record: String,
    pub delete_record: String,
}

/// 分页器摆放位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaginatorPosition {
    Top,
    Bottom,
    Both,
}

/// 单元格渲染：文本直出，或布尔值映射成两个文案
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CellRender {
    Text,
    Bool { truthy: String, falsy: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub title_key: String,
    /// 取行数据的哪个字段
    pub field: String,
    pub render: CellRender,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Input,
    Select,
}

/// 字段在哪些表单模式下生效（隐藏/只读都用这一套）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    None,
    Add,
    Edit,
    All,
}

impl Visibility {
    pub fn on_add(self) -> bool {
        matches!(self, Visibility::Add | Visibility::All)
    }

    pub fn on_edit(self) -> bool {
        matches!(self, Visibility::Edit | Visibility::All)
    }
}

/// 校验规则是宿主表单层执行的，这里只是声明
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRule {
    pub required: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub label_key: String,
    pub kind: FieldKind,
    /// 初始值
    pub value: String,
    pub hidden: Visibility,
    pub readonly: Visibility,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<FieldRule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    pub placeholder_key: String,
}

/// 一个资源屏幕的完整描述，宿主拿它驱动整个 CRUD 界面
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrudDescriptor {
    pub text_keys: TextKeys,
    pub id_name: String,
    pub page_size: u32,
    pub paginator: PaginatorPosition,
    pub show_id_on_update: bool,
    pub columns: Vec<ColumnSpec>,
    pub form_fields: Vec<FormField>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_covers_both_modes() {
        assert!(Visibility::All.on_add());
        assert!(Visibility::All.on_edit());
        assert!(Visibility::Edit.on_edit());
        assert!(!Visibility::Edit.on_add());
        assert!(!Visibility::None.on_add());
        assert!(!Visibility::None.on_edit());
    }

    #[test]
    fn paginator_serializes_lowercase() {
        let v = serde_json::to_value(PaginatorPosition::Both).unwrap();
        assert_eq!(v, "both");
    }
}
