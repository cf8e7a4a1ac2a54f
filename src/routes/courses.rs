use actix_web::{HttpResponse, Result as ActixResult, web};

use super::{required, respond, respond_empty};
use crate::middlewares::RequireRole;
use crate::models::auth::entities::AuthUser;
use crate::models::courses::requests::{
    ClassIdQuery, ClassNoteRequest, CreateClassRequest, CreateCourseRequest, ScheduleQuery,
};
use crate::models::students::requests::CourseIdQuery;
use crate::models::users::entities::UserRole;
use crate::services::CourseService;

pub async fn new_course(
    service: web::Data<CourseService>,
    caller: AuthUser,
    request: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        service.create_course(&caller, request.into_inner()).await,
        "Course created",
    )
}

pub async fn all_courses(service: web::Data<CourseService>) -> ActixResult<HttpResponse> {
    respond(service.list_courses().await, "Courses retrieved")
}

pub async fn new_class(
    service: web::Data<CourseService>,
    caller: AuthUser,
    request: web::Json<CreateClassRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        service
            .create_class_session(&caller, request.into_inner())
            .await,
        "Class session created",
    )
}

pub async fn course_sessions(
    service: web::Data<CourseService>,
    query: web::Query<CourseIdQuery>,
) -> ActixResult<HttpResponse> {
    let result = async {
        let course_id = required(query.course_id, "course_id")?;
        service.list_class_sessions(course_id).await
    }
    .await;
    respond(result, "Class sessions retrieved")
}

pub async fn fix_course_information(
    service: web::Data<CourseService>,
    caller: AuthUser,
    query: web::Query<CourseIdQuery>,
    request: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    let result = async {
        let course_id = required(query.course_id, "course_id")?;
        service
            .update_course(&caller, course_id, request.into_inner())
            .await
    }
    .await;
    respond(result, "Course updated")
}

pub async fn delete_course(
    service: web::Data<CourseService>,
    caller: AuthUser,
    query: web::Query<CourseIdQuery>,
) -> ActixResult<HttpResponse> {
    let result = async {
        let course_id = required(query.course_id, "course_id")?;
        service.delete_course(&caller, course_id).await
    }
    .await;
    respond_empty(result, "Course deleted")
}

pub async fn delete_class(
    service: web::Data<CourseService>,
    caller: AuthUser,
    query: web::Query<ClassIdQuery>,
) -> ActixResult<HttpResponse> {
    let result = async {
        let class_id = required(query.class_id, "class_id")?;
        service.delete_class_session(&caller, class_id).await
    }
    .await;
    respond_empty(result, "Class session deleted")
}

pub async fn note(
    service: web::Data<CourseService>,
    caller: AuthUser,
    request: web::Json<ClassNoteRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        service.add_class_note(&caller, request.into_inner()).await,
        "Note saved",
    )
}

pub async fn my_schedule(
    service: web::Data<CourseService>,
    caller: AuthUser,
    query: web::Query<ScheduleQuery>,
) -> ActixResult<HttpResponse> {
    let result = async {
        let query = query.into_inner();
        let from = required(query.from, "from")?;
        let to = required(query.to, "to")?;
        service.my_schedule(&caller, &from, &to).await
    }
    .await;
    respond(result, "Schedule retrieved")
}

pub async fn user_schedule(
    service: web::Data<CourseService>,
    caller: AuthUser,
    query: web::Query<ScheduleQuery>,
) -> ActixResult<HttpResponse> {
    let result = async {
        let query = query.into_inner();
        let user_id = required(query.user_id, "user_id")?;
        let from = required(query.from, "from")?;
        let to = required(query.to, "to")?;
        service.user_schedule(&caller, user_id, &from, &to).await
    }
    .await;
    respond(result, "Schedule retrieved")
}

pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/all-courses", web::get().to(all_courses))
        .route("/course-sessions", web::get().to(course_sessions))
        .route("/my-schedule", web::get().to(my_schedule))
        .route("/user-schedule", web::get().to(user_schedule))
        .route("/note", web::post().to(note))
        .service(
            web::resource("/new-course")
                .wrap(RequireRole::new_any(UserRole::elevated_roles()))
                .route(web::post().to(new_course)),
        )
        .service(
            web::resource("/new-class")
                .wrap(RequireRole::new_any(UserRole::elevated_roles()))
                .route(web::post().to(new_class)),
        )
        .service(
            web::resource("/fix-course-information")
                .wrap(RequireRole::new_any(UserRole::elevated_roles()))
                .route(web::put().to(fix_course_information)),
        )
        .service(
            web::resource("/delete-course")
                .wrap(RequireRole::new_any(UserRole::elevated_roles()))
                .route(web::delete().to(delete_course)),
        )
        .service(
            web::resource("/delete-class")
                .wrap(RequireRole::new_any(UserRole::elevated_roles()))
                .route(web::delete().to(delete_class)),
        );
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    use crate::models::users::entities::UserRole;
    use crate::routes::test_app::{bearer, configure, jwt};
    use crate::models::courses::entities::NewClassSession;
    use crate::services::test_support::{date, seed_course, seed_user, storage};

    #[actix_web::test]
    async fn schedule_and_list_sessions() {
        let storage = storage().await;
        let (teacher_id, _, course_id) = seed_course(&storage).await;
        let jwt = jwt();
        let leader = bearer(&jwt, 9, UserRole::Leader);
        let app = test::init_service(App::new().configure(configure(storage, jwt))).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/new-class")
            .insert_header(leader.clone())
            .set_json(json!({"course_id": course_id, "class_date": "2024-03-04", "start_time": "18:00"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/course-sessions?course_id={course_id}"))
            .insert_header(leader.clone())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"][0]["teacher_id"], teacher_id);
        assert_eq!(body["data"][0]["start_time"], "18:00:00");

        let req = test::TestRequest::get()
            .uri("/api/v1/course-sessions")
            .insert_header(leader)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn schedules_are_scoped_by_role() {
        let storage = storage().await;
        let (teacher_id, _, course_id) = seed_course(&storage).await;
        let other = seed_user(&storage, "teacher2", "Le Van C").await;
        storage
            .create_class_session(NewClassSession {
                course_id,
                teacher_id,
                class_date: date(2024, 3, 4),
                start_time: None,
                end_time: None,
                room: Some("A101".to_string()),
                note: None,
            })
            .await
            .unwrap();
        let jwt = jwt();
        let teacher = bearer(&jwt, teacher_id, UserRole::User);
        let colleague = bearer(&jwt, other.id, UserRole::User);
        let leader = bearer(&jwt, 9, UserRole::Leader);
        let app = test::init_service(App::new().configure(configure(storage, jwt))).await;

        let req = test::TestRequest::get()
            .uri("/api/v1/my-schedule?from=2024-03-01&to=2024-03-31")
            .insert_header(teacher.clone())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"][0]["room"], "A101");

        let req = test::TestRequest::get()
            .uri("/api/v1/my-schedule?from=2024-03-01")
            .insert_header(teacher)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let uri = format!("/api/v1/user-schedule?user_id={teacher_id}&from=2024-03-01&to=2024-03-31");
        let req = test::TestRequest::get()
            .uri(&uri)
            .insert_header(colleague)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::get()
            .uri(&uri)
            .insert_header(leader)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    }

    #[actix_web::test]
    async fn edit_note_and_delete_course() {
        let storage = storage().await;
        let (teacher_id, payroll_id, course_id) = seed_course(&storage).await;
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
        let teacher = bearer(&jwt, teacher_id, UserRole::User);
        let admin = bearer(&jwt, 1, UserRole::Admin);
        let app = test::init_service(App::new().configure(configure(storage, jwt))).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/note")
            .insert_header(teacher.clone())
            .set_json(json!({"class_id": class.id, "note": "Unit 3 done"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["note"], "Unit 3 done");

        let edit = json!({
            "course_name": "IELTS Intermediate",
            "payroll_id": payroll_id,
            "teacher_id": teacher_id,
            "start_date": "2024-03-01",
            "end_date": "2024-08-31"
        });
        let uri = format!("/api/v1/fix-course-information?course_id={course_id}");
        let req = test::TestRequest::put()
            .uri(&uri)
            .insert_header(teacher.clone())
            .set_json(edit.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::put()
            .uri(&uri)
            .insert_header(admin.clone())
            .set_json(edit)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["course_name"], "IELTS Intermediate");
        assert_eq!(body["data"]["end_date"], "2024-08-31");

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/delete-course?course_id={course_id}"))
            .insert_header(admin.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        // 课时随课程删除
        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/delete-class?class_id={}", class.id))
            .insert_header(admin)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
