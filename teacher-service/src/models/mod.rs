pub mod teacher;

pub use teacher::{InvalidTeacherId, Teacher, TeacherDocument, TeacherId, TeacherPatch};
