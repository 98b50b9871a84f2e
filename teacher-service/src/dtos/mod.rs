pub mod teacher;

pub use teacher::{CreateTeacherRequest, UpdateTeacherRequest};
