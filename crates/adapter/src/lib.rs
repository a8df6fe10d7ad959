mod crud;
mod screen;

pub use crud::{AdapterError, CommentCrud};
pub use screen::{descriptor, form_fields, table_columns, text_keys, ID_NAME, PAGE_SIZE};
