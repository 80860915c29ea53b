//! Mapping between the domain `Student` and the `StudentEntity` record
//!
//! Both shapes carry the same fields, so each direction is a plain
//! field-for-field copy. Every field is listed explicitly.

use student_domain::{Student, StudentId};

use super::entity::StudentEntity;

/// Convert a domain student into a storage record
pub fn to_student_entity(student: Student) -> StudentEntity {
    StudentEntity {
        id: student.id.map(i64::from),
        firstname: student.firstname,
        lastname: student.lastname,
        age: student.age,
        address: student.address,
    }
}

/// Convert a storage record into a domain student
pub fn to_student(entity: StudentEntity) -> Student {
    Student {
        id: entity.id.map(StudentId::from),
        firstname: entity.firstname,
        lastname: entity.lastname,
        age: entity.age,
        address: entity.address,
    }
}

/// Convert storage records into domain students, preserving order
pub fn to_student_list(entities: Vec<StudentEntity>) -> Vec<Student> {
    entities.into_iter().map(to_student).collect()
}
