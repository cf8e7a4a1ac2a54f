use actix_web::{HttpResponse, Result as ActixResult, web};

use super::respond;
use crate::models::attendance::requests::{FixAttendanceRequest, RecordAttendanceRequest};
use crate::models::auth::entities::AuthUser;
use crate::services::AttendanceService;

pub async fn check_attendance(
    service: web::Data<AttendanceService>,
    caller: AuthUser,
    request: web::Json<RecordAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        service
            .record_attendance(&caller, request.into_inner())
            .await,
        "Attendance recorded",
    )
}

pub async fn fix_attendance_status(
    service: web::Data<AttendanceService>,
    caller: AuthUser,
    request: web::Json<FixAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        service
            .update_attendance_status(&caller, request.into_inner())
            .await,
        "Attendance updated",
    )
}

pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/check-attendance-student", web::post().to(check_attendance))
        .route("/fix-attendance-status", web::put().to(fix_attendance_status));
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use serde_json::json;

    use crate::models::users::entities::UserRole;
    use crate::routes::test_app::{bearer, configure, jwt};
    use crate::models::courses::entities::NewClassSession;
    use crate::services::test_support::{date, seed_course, seed_user, storage};

    #[actix_web::test]
    async fn fixing_missing_record_is_not_found() {
        let jwt = jwt();
        let user = bearer(&jwt, 1, UserRole::User);
        let app = test::init_service(App::new().configure(configure(storage().await, jwt))).await;

        let req = test::TestRequest::put()
            .uri("/api/v1/fix-attendance-status")
            .insert_header(user.clone())
            .set_json(json!({"class_id": 1, "student_id": 1, "status": "late"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::put()
            .uri("/api/v1/fix-attendance-status")
            .insert_header(user)
            .set_json(json!({"class_id": 1, "student_id": 1, "status": "sleeping"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn non_teacher_cannot_take_the_roll() {
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
        let jwt = jwt();
        let user = bearer(&jwt, other.id, UserRole::User);
        let app = test::init_service(App::new().configure(configure(storage, jwt))).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/check-attendance-student")
            .insert_header(user)
            .set_json(json!({
                "class_id": class.id,
                "entries": [{"student_id": 1, "status": "present"}]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
