use super::StudentService;
use crate::errors::{HWSystemError, Result};
use crate::models::students::entities::Student;

pub async fn students_by_course(service: &StudentService, course_id: i64) -> Result<Vec<Student>> {
    if service
        .storage()
        .get_course_by_id(course_id)
        .await?
        .is_none()
    {
        return Err(HWSystemError::not_found(format!(
            "Course {course_id} not found"
        )));
    }
    service.storage().list_students_by_course(course_id).await
}
