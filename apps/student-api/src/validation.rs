//! Request validation
//!
//! The only gate between the wire and the domain. A `StudentCreateRequest`
//! becomes a `ValidatedStudentRequest` only when every constraint holds;
//! otherwise all violations are reported at once.

use std::fmt;

use crate::dto::student::StudentCreateRequest;

/// A single violated constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    field: &'static str,
    message: String,
}

impl FieldViolation {
    fn blank(field: &'static str) -> Self {
        Self {
            field,
            message: format!("Field {field} cannot be empty or null."),
        }
    }

    fn null(field: &'static str) -> Self {
        Self {
            field,
            message: format!("Field {field} cannot be null."),
        }
    }
}

/// Every constraint a request violated, in field order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    /// Names of the offending fields
    pub fn fields(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.field).collect()
    }

    /// Messages of every violation, in field order
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(|v| v.message.clone()).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join(" "))
    }
}

/// A request whose fields are all present and non-blank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedStudentRequest {
    pub firstname: String,
    pub lastname: String,
    pub age: i32,
    pub address: String,
}

/// Check every field of `request`
///
/// Strings must be present and contain at least one non-whitespace
/// character; `age` must be present.
pub fn validate(request: StudentCreateRequest) -> Result<ValidatedStudentRequest, ValidationErrors> {
    let mut violations = Vec::new();

    let firstname = require_text("firstname", request.firstname, &mut violations);
    let lastname = require_text("lastname", request.lastname, &mut violations);
    let age = request.age;
    if age.is_none() {
        violations.push(FieldViolation::null("age"));
    }
    let address = require_text("address", request.address, &mut violations);

    match (firstname, lastname, age, address) {
        (Some(firstname), Some(lastname), Some(age), Some(address)) if violations.is_empty() => {
            Ok(ValidatedStudentRequest {
                firstname,
                lastname,
                age,
                address,
            })
        }
        _ => Err(ValidationErrors { violations }),
    }
}

fn require_text(
    field: &'static str,
    value: Option<String>,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Some(text),
        _ => {
            violations.push(FieldViolation::blank(field));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        firstname: Option<&str>,
        lastname: Option<&str>,
        age: Option<i32>,
        address: Option<&str>,
    ) -> StudentCreateRequest {
        StudentCreateRequest {
            firstname: firstname.map(str::to_string),
            lastname: lastname.map(str::to_string),
            age,
            address: address.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        let validated =
            validate(request(Some("Ana"), Some("Lopez"), Some(21), Some("Main St"))).unwrap();

        assert_eq!(validated.firstname, "Ana");
        assert_eq!(validated.lastname, "Lopez");
        assert_eq!(validated.age, 21);
        assert_eq!(validated.address, "Main St");
    }

    #[test]
    fn test_blank_string_is_rejected() {
        let err = validate(request(Some("   "), Some("Lopez"), Some(21), Some("Main St")))
            .unwrap_err();

        assert_eq!(err.fields(), vec!["firstname"]);
        assert_eq!(
            err.messages(),
            vec!["Field firstname cannot be empty or null.".to_string()]
        );
    }

    #[test]
    fn test_missing_age_is_rejected() {
        let err = validate(request(Some("Ana"), Some("Lopez"), None, Some("Main St"))).unwrap_err();

        assert_eq!(err.messages(), vec!["Field age cannot be null.".to_string()]);
    }

    #[test]
    fn test_all_violations_are_reported_in_field_order() {
        let err = validate(StudentCreateRequest::default()).unwrap_err();

        assert_eq!(err.fields(), vec!["firstname", "lastname", "age", "address"]);
    }

    #[test]
    fn test_zero_age_is_accepted() {
        assert!(validate(request(Some("Ana"), Some("Lopez"), Some(0), Some("Main St"))).is_ok());
    }
}
