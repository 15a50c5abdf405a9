//! Tests for student registration ordering and error precedence

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::student::{NewStudent, Student};
use crate::errors::DomainError;
use crate::repositories::MockStudentStore;
use crate::services::enrollment::EnrollmentService;

fn new_student(phone: &str, email: Option<&str>) -> NewStudent {
    NewStudent {
        name: "Asha Rao".to_string(),
        phone: phone.to_string(),
        email: email.map(String::from),
        class_name: "Grade 10".to_string(),
        section: "B".to_string(),
    }
}

fn existing_student(phone: &str, email: Option<&str>) -> Student {
    Student::from_new(Uuid::new_v4(), new_student(phone, email))
}

#[tokio::test]
async fn registration_returns_record_with_generated_id() {
    let store = Arc::new(MockStudentStore::new());
    let service = EnrollmentService::new(store.clone());

    let student = service
        .register(new_student("+1", None))
        .await
        .unwrap();

    assert!(!student.id.is_nil());
    assert_eq!(student.name, "Asha Rao");
    assert_eq!(student.phone, "+1");
    assert_eq!(store.find_calls(), 1);
    assert_eq!(store.insert_calls(), 1);
}

#[tokio::test]
async fn phone_conflict_wins_regardless_of_email() {
    let store = Arc::new(MockStudentStore::new());
    store
        .seed(existing_student("+14155550001", Some("old@example.com")))
        .await;
    let service = EnrollmentService::new(store.clone());

    // Same phone, different email
    let result = service
        .register(new_student("+14155550001", Some("new@example.com")))
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Conflict { ref field }) if field == "phone"
    ));

    // Same phone, no email at all
    let result = service.register(new_student("+14155550001", None)).await;
    assert!(matches!(
        result,
        Err(DomainError::Conflict { ref field }) if field == "phone"
    ));

    assert_eq!(store.insert_calls(), 0);
}

#[tokio::test]
async fn email_conflict_reported_when_phone_differs() {
    let store = Arc::new(MockStudentStore::new());
    store
        .seed(existing_student("+14155550001", Some("taken@example.com")))
        .await;
    let service = EnrollmentService::new(store);

    let result = service
        .register(new_student("+14155550002", Some("taken@example.com")))
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Conflict { ref field }) if field == "email"
    ));
}

#[tokio::test]
async fn probe_failure_surfaces_as_store_error_before_insert() {
    let store = Arc::new(MockStudentStore::failing());
    let service = EnrollmentService::new(store.clone());

    let result = service.register(new_student("+1", None)).await;
    assert!(matches!(result, Err(DomainError::Store { .. })));

    // The probe failed, so the insert never ran
    assert_eq!(store.find_calls(), 1);
    assert_eq!(store.insert_calls(), 0);
}

#[tokio::test]
async fn registration_without_email_only_probes_phone() {
    let store = Arc::new(MockStudentStore::new());
    store
        .seed(existing_student("+14155550001", Some("present@example.com")))
        .await;
    let service = EnrollmentService::new(store);

    // Different phone, no email: no clash possible
    let student = service
        .register(new_student("+14155550002", None))
        .await
        .unwrap();
    assert_eq!(student.phone, "+14155550002");
}
