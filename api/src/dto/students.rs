use serde::{Deserialize, Serialize};
use validator::Validate;

use rc_core::domain::entities::{NewStudent, Student};
use rc_core::errors::ValidationError;

use super::required;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddStudentRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,

    /// Phone number in E.164 format
    #[validate(required, length(min = 1))]
    pub phone: Option<String>,

    /// Optional contact email; blank values are treated as absent
    pub email: Option<String>,

    #[validate(required, length(min = 1))]
    pub class_name: Option<String>,

    #[validate(required, length(min = 1))]
    pub section: Option<String>,
}

impl AddStudentRequest {
    /// Convert into the domain type, re-checking required fields
    ///
    /// Field order matches the declaration order, so the first missing
    /// field is the one reported.
    pub fn into_new_student(self) -> Result<NewStudent, ValidationError> {
        Ok(NewStudent {
            name: required(self.name, "name")?,
            phone: required(self.phone, "phone")?,
            email: self.email.filter(|e| !e.trim().is_empty()),
            class_name: required(self.class_name, "className")?,
            section: required(self.section, "section")?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddStudentResponse {
    pub success: bool,
    pub message: String,
    pub data: Student,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> AddStudentRequest {
        AddStudentRequest {
            name: Some("Asha Rao".to_string()),
            phone: Some("+14155552671".to_string()),
            email: Some("asha@example.com".to_string()),
            class_name: Some("5B".to_string()),
            section: Some("B".to_string()),
        }
    }

    #[test]
    fn conversion_carries_every_field() {
        let new = full_request().into_new_student().unwrap();
        assert_eq!(new.name, "Asha Rao");
        assert_eq!(new.phone, "+14155552671");
        assert_eq!(new.email.as_deref(), Some("asha@example.com"));
        assert_eq!(new.class_name, "5B");
        assert_eq!(new.section, "B");
    }

    #[test]
    fn blank_email_is_dropped() {
        let mut request = full_request();
        request.email = Some("   ".to_string());
        let new = request.into_new_student().unwrap();
        assert_eq!(new.email, None);
    }

    #[test]
    fn class_name_deserializes_from_camel_case() {
        let request: AddStudentRequest = serde_json::from_str(
            r#"{"name": "Asha Rao", "phone": "+14155552671", "className": "5B", "section": "B"}"#,
        )
        .unwrap();
        assert_eq!(request.class_name.as_deref(), Some("5B"));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn missing_class_name_is_reported_with_wire_name() {
        let mut request = full_request();
        request.class_name = None;
        let err = request.into_new_student().unwrap_err();
        assert_eq!(err.to_string(), "className is required");
    }
}
