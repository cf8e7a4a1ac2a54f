use actix_multipart::Multipart;
use actix_web::{HttpResponse, Result as ActixResult, web};

use super::{required, respond, respond_empty};
use crate::middlewares::RequireRole;
use crate::models::auth::entities::AuthUser;
use crate::models::students::requests::{AddStudentRequest, CourseIdQuery, StudentIdQuery};
use crate::models::users::entities::UserRole;
use crate::services::StudentService;

pub async fn insert_students(
    service: web::Data<StudentService>,
    query: web::Query<CourseIdQuery>,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    let result = async {
        let course_id = required(query.course_id, "course_id")?;
        service.import_students(payload, course_id).await
    }
    .await;
    respond(result, "Students imported")
}

pub async fn add_student(
    service: web::Data<StudentService>,
    query: web::Query<CourseIdQuery>,
    request: web::Json<AddStudentRequest>,
) -> ActixResult<HttpResponse> {
    let result = async {
        let course_id = required(query.course_id, "course_id")?;
        service
            .insert_one_student(request.into_inner(), course_id)
            .await
    }
    .await;
    respond(result, "Student added")
}

pub async fn list_students(
    service: web::Data<StudentService>,
    query: web::Query<CourseIdQuery>,
) -> ActixResult<HttpResponse> {
    let result = async {
        let course_id = required(query.course_id, "course_id")?;
        service.students_by_course(course_id).await
    }
    .await;
    respond(result, "Students retrieved")
}

pub async fn fix_student_info(
    service: web::Data<StudentService>,
    caller: AuthUser,
    query: web::Query<StudentIdQuery>,
    request: web::Json<AddStudentRequest>,
) -> ActixResult<HttpResponse> {
    let result = async {
        let student_id = required(query.student_id, "student_id")?;
        service
            .update_student(&caller, student_id, request.into_inner())
            .await
    }
    .await;
    respond(result, "Student updated")
}

pub async fn delete_student(
    service: web::Data<StudentService>,
    caller: AuthUser,
    query: web::Query<StudentIdQuery>,
) -> ActixResult<HttpResponse> {
    let result = async {
        let student_id = required(query.student_id, "student_id")?;
        service.delete_student(&caller, student_id).await
    }
    .await;
    respond_empty(result, "Student deleted")
}

pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/students", web::get().to(list_students))
        .service(
            web::resource("/insert-students")
                .wrap(RequireRole::new_any(UserRole::elevated_roles()))
                .route(web::post().to(insert_students)),
        )
        .service(
            web::resource("/add-student")
                .wrap(RequireRole::new_any(UserRole::elevated_roles()))
                .route(web::post().to(add_student)),
        )
        .service(
            web::resource("/fix-student-info")
                .wrap(RequireRole::new_any(UserRole::elevated_roles()))
                .route(web::put().to(fix_student_info)),
        )
        .service(
            web::resource("/delete-student")
                .wrap(RequireRole::new_any(UserRole::elevated_roles()))
                .route(web::delete().to(delete_student)),
        );
}
