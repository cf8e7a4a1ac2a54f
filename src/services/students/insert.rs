use tracing::info;

use super::StudentService;
use crate::errors::{HWSystemError, Result};
use crate::models::students::{
    entities::{NewStudent, Student},
    requests::AddStudentRequest,
};
use crate::utils::validate::{non_empty, parse_date, validate_email};

/// 校验后在同一事务内新建学生并关联课程
pub async fn insert_one_student(
    service: &StudentService,
    request: AddStudentRequest,
    course_id: i64,
) -> Result<Student> {
    let new_student = validate_student(request)?;
    let student = service
        .storage()
        .enroll_student(course_id, new_student)
        .await?;

    info!("Student {} enrolled in course {}", student.id, course_id);
    Ok(student)
}

pub(super) fn validate_student(request: AddStudentRequest) -> Result<NewStudent> {
    let student_name = non_empty(Some(request.student_name))
        .ok_or_else(|| HWSystemError::validation("student_name is required"))?;
    let dob = parse_date(&request.dob, "dob")?;
    let email = non_empty(request.email);
    if let Some(email) = &email {
        validate_email(email).map_err(HWSystemError::validation)?;
    }

    Ok(NewStudent {
        student_name,
        dob,
        email,
        phone_number: non_empty(request.phone_number),
    })
}
