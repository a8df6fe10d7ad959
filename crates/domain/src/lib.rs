mod descriptor;
mod models;

pub use descriptor::{
    CellRender, ColumnSpec, CrudDescriptor, FieldKind, FieldRule, FormField, PaginatorPosition,
    SelectOption, TextKeys, Visibility,
};
pub use models::{
    ApprovalUpdate, Comment, CommentDetail, CommentDraft, CommentRow, Envelope, NewComment, Page,
    Video,
};
