//! Request extractors for teacher routes.

pub mod json;
pub mod teacher_path;

pub use json::JsonBody;
pub use teacher_path::TeacherPath;
