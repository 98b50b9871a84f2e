pub mod health;
pub mod teachers;

pub use health::{health_check, metrics, readiness_check, root};
