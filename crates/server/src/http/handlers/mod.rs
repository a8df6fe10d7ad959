pub mod admin;
pub mod comments;
pub mod descriptor;
