mod store;
mod student;

pub use store::RecordStore;
pub use student::{StudentId, StudentRecord};
