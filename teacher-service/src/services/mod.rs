pub mod directory;
pub mod memory;
pub mod metrics;
pub mod mongo;
pub mod store;

pub use directory::TeacherDirectory;
pub use memory::InMemoryTeacherStore;
pub use metrics::{get_metrics, init_metrics};
pub use mongo::MongoTeacherStore;
pub use store::TeacherStore;
