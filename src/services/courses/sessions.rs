use tracing::info;

use super::CourseService;
use crate::errors::{HWSystemError, Result};
use crate::models::auth::entities::AuthUser;
use crate::models::courses::{
    entities::{ClassSession, Course, NewClassSession},
    requests::CreateClassRequest,
};
use crate::services::ensure_elevated;
use crate::utils::validate::{non_empty, parse_date, parse_optional_time};

async fn require_course(service: &CourseService, course_id: i64) -> Result<Course> {
    service
        .storage()
        .get_course_by_id(course_id)
        .await?
        .ok_or_else(|| HWSystemError::not_found(format!("Course {course_id} not found")))
}

/// 未指定老师时使用课程主讲
pub async fn create_class_session(
    service: &CourseService,
    caller: &AuthUser,
    request: CreateClassRequest,
) -> Result<ClassSession> {
    ensure_elevated(caller, "create class sessions")?;

    let class_date = parse_date(&request.class_date, "class_date")?;
    let start_time = parse_optional_time(request.start_time.as_deref(), "start_time")?;
    let end_time = parse_optional_time(request.end_time.as_deref(), "end_time")?;

    let course = require_course(service, request.course_id).await?;
    let teacher_id = match request.teacher_id {
        Some(id) if id != course.teacher_id => {
            if service.storage().get_user_by_id(id).await?.is_none() {
                return Err(HWSystemError::not_found(format!("Teacher {id} not found")));
            }
            id
        }
        _ => course.teacher_id,
    };

    let session = service
        .storage()
        .create_class_session(NewClassSession {
            course_id: course.id,
            teacher_id,
            class_date,
            start_time,
            end_time,
            room: non_empty(request.room),
            note: non_empty(request.note),
        })
        .await?;

    info!(
        "User {} scheduled class {} for course {}",
        caller.user_id, session.id, course.id
    );
    Ok(session)
}

pub async fn list_class_sessions(
    service: &CourseService,
    course_id: i64,
) -> Result<Vec<ClassSession>> {
    require_course(service, course_id).await?;
    service.storage().list_class_sessions(course_id).await
}

#[cfg(test)]
mod tests {
    use crate::models::courses::requests::CreateClassRequest;
    use crate::models::users::entities::UserRole;
    use crate::services::CourseService;
    use crate::services::test_support::{caller, date, seed_course, seed_user, storage};

    fn request(course_id: i64, teacher_id: Option<i64>, day: &str) -> CreateClassRequest {
        CreateClassRequest {
            course_id,
            teacher_id,
            class_date: day.to_string(),
            start_time: None,
            end_time: None,
            room: Some("A101".to_string()),
            note: None,
        }
    }

    #[tokio::test]
    async fn teacher_defaults_to_course_teacher() {
        let storage = storage().await;
        let (teacher_id, _, course_id) = seed_course(&storage).await;
        let substitute = seed_user(&storage, "teacher2", "Pham Van D").await;
        let service = CourseService::new(storage);
        let leader = caller(50, UserRole::Leader);

        let first = service
            .create_class_session(&leader, request(course_id, None, "2024-03-04"))
            .await
            .unwrap();
        assert_eq!(first.teacher_id, teacher_id);
        assert_eq!(first.class_date, date(2024, 3, 4));

        let second = service
            .create_class_session(&leader, request(course_id, Some(substitute.id), "2024-03-06"))
            .await
            .unwrap();
        assert_eq!(second.teacher_id, substitute.id);

        let sessions = service.list_class_sessions(course_id).await.unwrap();
        assert_eq!(
            sessions.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![first.id, second.id]
        );
    }

    #[tokio::test]
    async fn unknown_course_or_teacher() {
        let storage = storage().await;
        let (_, _, course_id) = seed_course(&storage).await;
        let service = CourseService::new(storage);
        let admin = caller(1, UserRole::Admin);

        let err = service
            .create_class_session(&admin, request(course_id + 1, None, "2024-03-04"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E006");

        let err = service
            .create_class_session(&admin, request(course_id, Some(999), "2024-03-04"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E006");

        let err = service.list_class_sessions(course_id + 1).await.unwrap_err();
        assert_eq!(err.code(), "E006");
    }
}
