//! Enrollment service module
//!
//! Registers student records against the external credential store,
//! enforcing the uniqueness of phone and email before insertion.

mod service;

#[cfg(test)]
mod tests;

pub use service::EnrollmentService;
