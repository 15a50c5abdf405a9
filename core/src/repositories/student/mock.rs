//! Mock implementation of StudentStore for testing

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::student::{NewStudent, Student};
use crate::errors::DomainError;

use super::trait_::StudentStore;

/// In-memory student store for tests
///
/// Tracks how many times each operation was called so tests can assert
/// that, for example, an unauthenticated request never reaches the
/// store.
pub struct MockStudentStore {
    students: Arc<RwLock<HashMap<Uuid, Student>>>,
    find_calls: AtomicUsize,
    insert_calls: AtomicUsize,
    should_fail: bool,
}

impl MockStudentStore {
    /// Create an empty mock store
    pub fn new() -> Self {
        Self {
            students: Arc::new(RwLock::new(HashMap::new())),
            find_calls: AtomicUsize::new(0),
            insert_calls: AtomicUsize::new(0),
            should_fail: false,
        }
    }

    /// Create a mock store whose operations all fail with a store error
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    /// Seed an existing record, bypassing uniqueness checks
    pub async fn seed(&self, student: Student) {
        self.students.write().await.insert(student.id, student);
    }

    /// Number of lookup calls observed
    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    /// Number of insert calls observed
    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    /// Total number of store operations observed
    pub fn total_calls(&self) -> usize {
        self.find_calls() + self.insert_calls()
    }
}

impl Default for MockStudentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudentStore for MockStudentStore {
    async fn find_by_phone_or_email(
        &self,
        phone: &str,
        email: Option<&str>,
    ) -> Result<Option<Student>, DomainError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);

        if self.should_fail {
            return Err(DomainError::Store {
                message: "mock store lookup failure".to_string(),
            });
        }

        let students = self.students.read().await;
        Ok(students
            .values()
            .find(|s| {
                s.phone == phone
                    || matches!((email, s.email.as_deref()), (Some(e), Some(existing)) if e == existing)
            })
            .cloned())
    }

    async fn insert(&self, new: NewStudent) -> Result<Student, DomainError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);

        if self.should_fail {
            return Err(DomainError::Store {
                message: "mock store insert failure".to_string(),
            });
        }

        let student = Student::from_new(Uuid::new_v4(), new);
        self.students
            .write()
            .await
            .insert(student.id, student.clone());
        Ok(student)
    }
}
