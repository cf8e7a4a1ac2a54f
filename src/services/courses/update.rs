use tracing::info;

use super::{CourseService, create::validate_course};
use crate::errors::Result;
use crate::models::auth::entities::AuthUser;
use crate::models::courses::{entities::Course, requests::CreateCourseRequest};
use crate::services::ensure_elevated;

/// 整体覆盖课程信息，校验规则与新建相同
pub async fn update_course(
    service: &CourseService,
    caller: &AuthUser,
    course_id: i64,
    request: CreateCourseRequest,
) -> Result<Course> {
    ensure_elevated(caller, "edit courses")?;

    let changes = validate_course(service, request).await?;
    let course = service.storage().update_course(course_id, changes).await?;

    info!("User {} updated course {}", caller.user_id, course.id);
    Ok(course)
}

/// 课时、出勤与花名册关联随课程一起删除
pub async fn delete_course(
    service: &CourseService,
    caller: &AuthUser,
    course_id: i64,
) -> Result<()> {
    ensure_elevated(caller, "delete courses")?;

    service.storage().delete_course(course_id).await?;
    info!("User {} deleted course {}", caller.user_id, course_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::models::courses::requests::CreateCourseRequest;
    use crate::models::users::entities::UserRole;
    use crate::services::CourseService;
    use crate::services::test_support::{caller, date, seed_course, storage};

    fn request(payroll_id: i64, teacher_id: i64, name: &str) -> CreateCourseRequest {
        CreateCourseRequest {
            course_name: name.to_string(),
            payroll_id,
            teacher_id,
            start_date: "2024-04-01".to_string(),
            end_date: "2024-07-31".to_string(),
            start_time: Some("08:00".to_string()),
            end_time: None,
            study_days: Some("Tue,Thu".to_string()),
            location: Some(" ".to_string()),
        }
    }

    #[tokio::test]
    async fn overwrites_course_fields() {
        let storage = storage().await;
        let (teacher_id, payroll_id, course_id) = seed_course(&storage).await;
        let service = CourseService::new(storage);
        let leader = caller(50, UserRole::Leader);

        let course = service
            .update_course(
                &leader,
                course_id,
                request(payroll_id, teacher_id, "IELTS Intermediate"),
            )
            .await
            .unwrap();
        assert_eq!(course.id, course_id);
        assert_eq!(course.course_name, "IELTS Intermediate");
        assert_eq!(course.start_date, date(2024, 4, 1));
        assert_eq!(course.location, None);

        let err = service
            .update_course(&leader, 404, request(payroll_id, teacher_id, "X"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E006");

        let err = service
            .update_course(&leader, course_id, request(payroll_id, teacher_id, "  "))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E005");
    }

    #[tokio::test]
    async fn delete_requires_elevated_and_existing_course() {
        let storage = storage().await;
        let (teacher_id, _, course_id) = seed_course(&storage).await;
        let service = CourseService::new(storage);

        let err = service
            .delete_course(&caller(teacher_id, UserRole::User), course_id)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E011");

        let admin = caller(1, UserRole::Admin);
        service.delete_course(&admin, course_id).await.unwrap();
        assert!(service.list_courses().await.unwrap().is_empty());

        let err = service.delete_course(&admin, course_id).await.unwrap_err();
        assert_eq!(err.code(), "E006");
    }
}
