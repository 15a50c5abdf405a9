pub mod student;

pub use student::{MockStudentStore, StudentStore};
