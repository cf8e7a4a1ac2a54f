pub mod attendance;
pub mod auth;
pub mod courses;
pub mod payrolls;
pub mod salaries;
pub mod students;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support;

pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use courses::CourseService;
pub use payrolls::PayrollService;
pub use salaries::SalaryService;
pub use students::StudentService;
pub use users::UserService;

use crate::errors::{HWSystemError, Result};
use crate::models::auth::entities::AuthUser;
use crate::models::courses::entities::ClassSession;

/// 拒绝普通员工，在任何存储访问之前调用
pub(crate) fn ensure_elevated(caller: &AuthUser, action: &str) -> Result<()> {
    if caller.is_elevated() {
        Ok(())
    } else {
        tracing::info!(
            "User {} (role: {}) denied: {}",
            caller.user_id,
            caller.role,
            action
        );
        Err(HWSystemError::authorization(format!(
            "Only leaders or admins can {action}"
        )))
    }
}

/// 读取课时，并要求调用者是该课时的老师或主管/管理员
pub(crate) async fn load_owned_class(
    storage: &std::sync::Arc<dyn crate::storage::Storage>,
    caller: &AuthUser,
    class_id: i64,
    action: &str,
) -> Result<ClassSession> {
    let class = storage
        .get_class_session_by_id(class_id)
        .await?
        .ok_or_else(|| HWSystemError::not_found(format!("Class {class_id} not found")))?;

    if class.teacher_id != caller.user_id && !caller.is_elevated() {
        tracing::info!(
            "User {} denied: {} on class {} taught by {}",
            caller.user_id,
            action,
            class_id,
            class.teacher_id
        );
        return Err(HWSystemError::authorization(format!(
            "Only the class teacher, leaders or admins can {action}"
        )));
    }
    Ok(class)
}
