//! Mapping between REST shapes and the domain `Student`
//!
//! Pure and total: validation has already happened by the time a request is
//! mapped. The only field dropped on purpose is `id` on creation, which the
//! request does not carry.

use student_domain::Student;

use crate::{dto::student::StudentResponse, validation::ValidatedStudentRequest};

/// Build an unsaved domain student from a validated request
pub fn to_student(request: ValidatedStudentRequest) -> Student {
    Student {
        id: None,
        firstname: request.firstname,
        lastname: request.lastname,
        age: request.age,
        address: request.address,
    }
}

/// Project a domain student onto the response shape
pub fn to_student_response(student: Student) -> StudentResponse {
    StudentResponse {
        id: student.id.map(i64::from),
        firstname: student.firstname,
        lastname: student.lastname,
        age: student.age,
        address: student.address,
    }
}

/// Project every student, preserving order and length
pub fn to_student_response_list(students: Vec<Student>) -> Vec<StudentResponse> {
    students.into_iter().map(to_student_response).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use student_domain::StudentId;

    #[test]
    fn test_request_maps_without_id() {
        let student = to_student(ValidatedStudentRequest {
            firstname: "Ana".to_string(),
            lastname: "Lopez".to_string(),
            age: 21,
            address: "Main St".to_string(),
        });

        assert_eq!(student, Student::new("Ana", "Lopez", 21, "Main St"));
    }

    #[test]
    fn test_response_copies_every_field() {
        let student = Student::new("Ana", "Lopez", 21, "Main St").with_id(StudentId::new(1));

        let response = to_student_response(student);

        assert_eq!(
            response,
            StudentResponse {
                id: Some(1),
                firstname: "Ana".to_string(),
                lastname: "Lopez".to_string(),
                age: 21,
                address: "Main St".to_string(),
            }
        );
    }

    #[test]
    fn test_response_list_preserves_order_and_length() {
        let students = vec![
            Student::new("Carla", "Ruiz", 19, "Elm St").with_id(StudentId::new(3)),
            Student::new("Ana", "Lopez", 21, "Main St").with_id(StudentId::new(1)),
            Student::new("Beto", "Diaz", 25, "Oak Rd").with_id(StudentId::new(2)),
        ];

        let responses = to_student_response_list(students);

        assert_eq!(responses.len(), 3);
        let ids: Vec<_> = responses.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![Some(3), Some(1), Some(2)]);
        assert_eq!(responses[0].firstname, "Carla");
    }

    #[test]
    fn test_empty_list_maps_to_empty_list() {
        assert!(to_student_response_list(Vec::new()).is_empty());
    }
}
