//! Main enrollment service implementation

use std::sync::Arc;

use crate::domain::entities::student::{NewStudent, Student};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::StudentStore;
use rc_shared::utils::phone::mask_phone_number;

/// Enrollment service for creating student records
pub struct EnrollmentService<R: StudentStore> {
    store: Arc<R>,
}

impl<R: StudentStore> EnrollmentService<R> {
    /// Create a new enrollment service
    pub fn new(store: Arc<R>) -> Self {
        Self { store }
    }

    /// Register a new student record
    ///
    /// Ordering is fixed and observable: a uniqueness probe against the
    /// store, then the insert. Field presence validation happens at the
    /// request boundary before this method runs.
    ///
    /// # Arguments
    ///
    /// * `new` - The record to insert; the store assigns the id
    ///
    /// # Returns
    ///
    /// * `Ok(Student)` - The stored record, id included
    /// * `Err(DomainError::Conflict)` - A record with this phone or email exists
    /// * `Err(DomainError::Store)` - The store probe or insert failed
    pub async fn register(&self, new: NewStudent) -> DomainResult<Student> {
        let existing = self
            .store
            .find_by_phone_or_email(&new.phone, new.email.as_deref())
            .await?;

        if let Some(existing) = existing {
            // Phone takes precedence when reporting which field clashed
            let field = if existing.phone == new.phone {
                "phone"
            } else {
                "email"
            };
            tracing::warn!(
                phone = %mask_phone_number(&new.phone),
                field = field,
                event = "enrollment_conflict",
                "Rejected duplicate student registration"
            );
            return Err(DomainError::Conflict {
                field: field.to_string(),
            });
        }

        let student = self.store.insert(new).await?;

        tracing::info!(
            student_id = %student.id,
            phone = %mask_phone_number(&student.phone),
            event = "student_registered",
            "Registered new student"
        );

        Ok(student)
    }
}
