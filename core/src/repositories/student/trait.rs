//! Student store trait defining the interface for record persistence.
//!
//! The credential store is an external HTTP service; this trait is the
//! narrow seam between domain logic and that collaborator. The enrollment
//! service only ever needs two operations: a uniqueness probe and an
//! insert.

use async_trait::async_trait;

use crate::domain::entities::student::{NewStudent, Student};
use crate::errors::DomainError;

/// Persistence operations for student records
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Find a record whose phone matches, or whose email matches when an
    /// email is given
    ///
    /// # Arguments
    /// * `phone` - Phone number to match exactly
    /// * `email` - Email to match exactly; `None` skips the email clause
    ///
    /// # Returns
    /// * `Ok(Some(Student))` - A record with that phone or email exists
    /// * `Ok(None)` - No matching record ("no row found" is not an error)
    /// * `Err(DomainError::Store)` - The lookup itself failed
    async fn find_by_phone_or_email(
        &self,
        phone: &str,
        email: Option<&str>,
    ) -> Result<Option<Student>, DomainError>;

    /// Insert a new record and return it with the store-generated id
    ///
    /// # Returns
    /// * `Ok(Student)` - The stored record, id included
    /// * `Err(DomainError::Store)` - The insert failed
    async fn insert(&self, new: NewStudent) -> Result<Student, DomainError>;
}
