//! Student entity representing an enrolled student record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored student record, including the store-generated identifier
///
/// Wire representation uses camelCase (`className`), matching the store
/// schema and the public API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Identifier generated by the credential store on insert
    pub id: Uuid,

    /// Full name
    pub name: String,

    /// Phone number; unique across records
    pub phone: String,

    /// Email address; unique across records when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Class the student is enrolled in
    pub class_name: String,

    /// Section within the class
    pub section: String,
}

/// Insert payload for a new student record; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub class_name: String,
    pub section: String,
}

impl Student {
    /// Build a stored record from an insert payload and a generated id
    pub fn from_new(id: Uuid, new: NewStudent) -> Self {
        Self {
            id,
            name: new.name,
            phone: new.phone,
            email: new.email,
            class_name: new.class_name,
            section: new.section,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_new() -> NewStudent {
        NewStudent {
            name: "Asha Rao".to_string(),
            phone: "+14155552671".to_string(),
            email: Some("asha@example.com".to_string()),
            class_name: "Grade 10".to_string(),
            section: "B".to_string(),
        }
    }

    #[test]
    fn from_new_carries_all_fields() {
        let id = Uuid::new_v4();
        let student = Student::from_new(id, sample_new());

        assert_eq!(student.id, id);
        assert_eq!(student.name, "Asha Rao");
        assert_eq!(student.phone, "+14155552671");
        assert_eq!(student.email.as_deref(), Some("asha@example.com"));
        assert_eq!(student.class_name, "Grade 10");
        assert_eq!(student.section, "B");
    }

    #[test]
    fn serializes_class_name_as_camel_case() {
        let json = serde_json::to_value(sample_new()).unwrap();
        assert!(json.get("className").is_some());
        assert!(json.get("class_name").is_none());
    }

    #[test]
    fn omits_missing_email_from_json() {
        let mut new = sample_new();
        new.email = None;
        let json = serde_json::to_value(new).unwrap();
        assert!(json.get("email").is_none());
    }

    #[test]
    fn deserializes_store_row() {
        let row = serde_json::json!({
            "id": "3f9f42e4-98d2-47f5-86b0-5a4a58e9f6f0",
            "name": "Asha Rao",
            "phone": "+14155552671",
            "email": null,
            "className": "Grade 10",
            "section": "B"
        });
        let student: Student = serde_json::from_value(row).unwrap();
        assert_eq!(student.class_name, "Grade 10");
        assert!(student.email.is_none());
    }
}
