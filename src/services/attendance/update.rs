use tracing::info;

use super::AttendanceService;
use crate::errors::Result;
use crate::models::attendance::{entities::Attendance, requests::FixAttendanceRequest};
use crate::models::auth::entities::AuthUser;
use crate::services::load_owned_class;

/// 只修改已存在的一条记录，没有记录返回 NotFound
pub async fn update_attendance_status(
    service: &AttendanceService,
    caller: &AuthUser,
    request: FixAttendanceRequest,
) -> Result<Attendance> {
    load_owned_class(service.storage(), caller, request.class_id, "fix attendance").await?;

    let updated = service
        .storage()
        .update_attendance_status(request.class_id, request.student_id, request.status)
        .await?;

    info!(
        "User {} set attendance of student {} in class {} to {}",
        caller.user_id, request.student_id, request.class_id, request.status
    );
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use crate::models::attendance::{entities::AttendanceStatus, requests::FixAttendanceRequest};
    use crate::models::users::entities::UserRole;
    use crate::services::AttendanceService;
    use crate::models::courses::entities::NewClassSession;
    use crate::services::test_support::{caller, date, seed_course, seed_user, storage};

    #[tokio::test]
    async fn missing_record_is_not_found() {
        let service = AttendanceService::new(storage().await);
        let err = service
            .update_attendance_status(
                &caller(1, UserRole::User),
                FixAttendanceRequest {
                    class_id: 1,
                    student_id: 1,
                    status: AttendanceStatus::Excused,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E006");
    }

    #[tokio::test]
    async fn other_teacher_cannot_fix_status() {
        let storage = storage().await;
        let (teacher_id, _, course_id) = seed_course(&storage).await;
        let other = seed_user(&storage, "teacher2", "Le Van C").await;
        let class = storage
            .create_class_session(NewClassSession {
                course_id,
                teacher_id,
                class_date: date(2024, 3, 4),
                start_time: None,
                end_time: None,
                room: None,
                note: None,
            })
            .await
            .unwrap();
        let service = AttendanceService::new(storage);

        let err = service
            .update_attendance_status(
                &caller(other.id, UserRole::User),
                FixAttendanceRequest {
                    class_id: class.id,
                    student_id: 1,
                    status: AttendanceStatus::Excused,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E011");
    }
}
