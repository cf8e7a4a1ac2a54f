use tracing::info;

use super::CourseService;
use crate::errors::{HWSystemError, Result};
use crate::models::auth::entities::AuthUser;
use crate::models::courses::{
    entities::{Course, NewCourse},
    requests::CreateCourseRequest,
};
use crate::services::ensure_elevated;
use crate::utils::validate::{non_empty, parse_date, parse_optional_time};

pub async fn create_course(
    service: &CourseService,
    caller: &AuthUser,
    request: CreateCourseRequest,
) -> Result<Course> {
    ensure_elevated(caller, "create courses")?;

    let new_course = validate_course(service, request).await?;
    let course = service.storage().create_course(new_course).await?;

    info!("User {} created course {}", caller.user_id, course.id);
    Ok(course)
}

/// 校验课程表单：日期区间、时间格式，薪资类型与老师必须存在
pub(super) async fn validate_course(
    service: &CourseService,
    request: CreateCourseRequest,
) -> Result<NewCourse> {
    let course_name = non_empty(Some(request.course_name))
        .ok_or_else(|| HWSystemError::validation("course_name is required"))?;
    let start_date = parse_date(&request.start_date, "start_date")?;
    let end_date = parse_date(&request.end_date, "end_date")?;
    if end_date < start_date {
        return Err(HWSystemError::validation(
            "end_date must not be before start_date",
        ));
    }
    let start_time = parse_optional_time(request.start_time.as_deref(), "start_time")?;
    let end_time = parse_optional_time(request.end_time.as_deref(), "end_time")?;

    let storage = service.storage();
    if storage
        .get_payroll_type_by_id(request.payroll_id)
        .await?
        .is_none()
    {
        return Err(HWSystemError::not_found(format!(
            "Payroll type {} not found",
            request.payroll_id
        )));
    }
    if storage.get_user_by_id(request.teacher_id).await?.is_none() {
        return Err(HWSystemError::not_found(format!(
            "Teacher {} not found",
            request.teacher_id
        )));
    }

    Ok(NewCourse {
        course_name,
        payroll_id: request.payroll_id,
        teacher_id: request.teacher_id,
        start_date,
        end_date,
        start_time,
        end_time,
        study_days: non_empty(request.study_days),
        location: non_empty(request.location),
    })
}

#[cfg(test)]
mod tests {
    use crate::models::courses::requests::CreateCourseRequest;
    use crate::models::users::entities::UserRole;
    use crate::services::CourseService;
    use crate::services::test_support::{caller, date, seed_user, storage};

    fn request(payroll_id: i64, teacher_id: i64, end: &str) -> CreateCourseRequest {
        CreateCourseRequest {
            course_name: "TOEIC 550".to_string(),
            payroll_id,
            teacher_id,
            start_date: "2024-03-01".to_string(),
            end_date: end.to_string(),
            start_time: Some("18:00".to_string()),
            end_time: Some("19:30".to_string()),
            study_days: Some("Mon,Wed".to_string()),
            location: None,
        }
    }

    #[tokio::test]
    async fn creates_course_with_existing_references() {
        let storage = storage().await;
        let teacher = seed_user(&storage, "teacher1", "Tran Thi B").await;
        let payroll = storage
            .create_payroll_type("TOEIC".to_string(), None)
            .await
            .unwrap();
        let service = CourseService::new(storage);
        let admin = caller(1, UserRole::Admin);

        let course = service
            .create_course(&admin, request(payroll.id, teacher.id, "2024-06-30"))
            .await
            .unwrap();
        assert_eq!(course.end_date, date(2024, 6, 30));
        assert_eq!(service.list_courses().await.unwrap().len(), 1);

        let err = service
            .create_course(&admin, request(payroll.id, 999, "2024-06-30"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E006");

        let err = service
            .create_course(&admin, request(999, teacher.id, "2024-06-30"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E006");
    }

    #[tokio::test]
    async fn rejects_inverted_dates_and_plain_users() {
        let service = CourseService::new(storage().await);

        let err = service
            .create_course(&caller(1, UserRole::Leader), request(1, 1, "2024-02-01"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E005");

        let err = service
            .create_course(&caller(2, UserRole::User), request(1, 1, "2024-06-30"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E011");
    }
}
