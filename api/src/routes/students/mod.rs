//! Student route handlers

pub mod add_student;
