//! 课表：某老师在日期区间内的全部课时

use tracing::debug;

use super::CourseService;
use crate::errors::{HWSystemError, Result};
use crate::models::auth::entities::AuthUser;
use crate::models::courses::entities::ClassSession;
use crate::utils::validate::parse_date;

// 一次最多查一年
const MAX_SCHEDULE_DAYS: i64 = 366;

/// 普通员工只能看自己的课表
pub async fn user_schedule(
    service: &CourseService,
    caller: &AuthUser,
    user_id: i64,
    from: &str,
    to: &str,
) -> Result<Vec<ClassSession>> {
    if user_id != caller.user_id && !caller.is_elevated() {
        return Err(HWSystemError::authorization(
            "Only leaders or admins can view other schedules",
        ));
    }

    let from = parse_date(from, "from")?;
    let to = parse_date(to, "to")?;
    if to < from {
        return Err(HWSystemError::validation("to must not be before from"));
    }
    if (to - from).num_days() >= MAX_SCHEDULE_DAYS {
        return Err(HWSystemError::validation(format!(
            "Schedule range must be shorter than {MAX_SCHEDULE_DAYS} days"
        )));
    }

    let storage = service.storage();
    if user_id != caller.user_id && storage.get_user_by_id(user_id).await?.is_none() {
        return Err(HWSystemError::not_found(format!("User {user_id} not found")));
    }

    let sessions = storage.list_sessions_by_teacher(user_id, from, to).await?;
    debug!(
        "Schedule of user {} from {} to {}: {} session(s)",
        user_id,
        from,
        to,
        sessions.len()
    );
    Ok(sessions)
}

#[cfg(test)]
mod tests {
    use crate::models::courses::entities::NewClassSession;
    use crate::models::users::entities::UserRole;
    use crate::services::CourseService;
    use crate::services::test_support::{caller, date, seed_course, seed_user, storage};

    #[tokio::test]
    async fn schedule_is_scoped_to_caller() {
        let storage = storage().await;
        let (teacher_id, _, course_id) = seed_course(&storage).await;
        let other = seed_user(&storage, "teacher2", "Le Van C").await;
        for day in [4, 11, 18] {
            storage
                .create_class_session(NewClassSession {
                    course_id,
                    teacher_id,
                    class_date: date(2024, 3, day),
                    start_time: None,
                    end_time: None,
                    room: None,
                    note: None,
                })
                .await
                .unwrap();
        }
        let service = CourseService::new(storage);
        let teacher = caller(teacher_id, UserRole::User);

        let mine = service
            .my_schedule(&teacher, "2024-03-01", "2024-03-11")
            .await
            .unwrap();
        assert_eq!(
            mine.iter().map(|s| s.class_date).collect::<Vec<_>>(),
            vec![date(2024, 3, 4), date(2024, 3, 11)]
        );

        let err = service
            .user_schedule(
                &caller(other.id, UserRole::User),
                teacher_id,
                "2024-03-01",
                "2024-03-31",
            )
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E011");

        let seen_by_leader = service
            .user_schedule(
                &caller(other.id, UserRole::Leader),
                teacher_id,
                "2024-03-01",
                "2024-03-31",
            )
            .await
            .unwrap();
        assert_eq!(seen_by_leader.len(), 3);
    }

    #[tokio::test]
    async fn rejects_bad_ranges_and_unknown_users() {
        let service = CourseService::new(storage().await);
        let me = caller(1, UserRole::User);

        let err = service
            .my_schedule(&me, "2024-03-31", "2024-03-01")
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E005");

        let err = service
            .my_schedule(&me, "2024-01-01", "2025-06-01")
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E005");

        let err = service
            .user_schedule(&caller(1, UserRole::Admin), 404, "2024-03-01", "2024-03-31")
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E006");
    }
}
