use tracing::info;

use super::{StudentService, insert::validate_student};
use crate::errors::Result;
use crate::models::auth::entities::AuthUser;
use crate::models::students::{entities::Student, requests::AddStudentRequest};
use crate::services::ensure_elevated;

/// 整体覆盖学生信息，校验规则与录入相同
pub async fn update_student(
    service: &StudentService,
    caller: &AuthUser,
    student_id: i64,
    request: AddStudentRequest,
) -> Result<Student> {
    ensure_elevated(caller, "edit students")?;

    let changes = validate_student(request)?;
    let student = service.storage().update_student(student_id, changes).await?;

    info!("User {} updated student {}", caller.user_id, student.id);
    Ok(student)
}

pub async fn delete_student(
    service: &StudentService,
    caller: &AuthUser,
    student_id: i64,
) -> Result<()> {
    ensure_elevated(caller, "delete students")?;

    service.storage().delete_student(student_id).await?;
    info!("User {} deleted student {}", caller.user_id, student_id);
    Ok(())
}
