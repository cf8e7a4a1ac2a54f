use actix_web::{HttpResponse, Result as ActixResult, web};

use super::respond;
use crate::middlewares::RequireRole;
use crate::models::auth::entities::AuthUser;
use crate::models::salaries::requests::{
    ComputeSalaryRequest, ModifySalaryConfigurationRequest, SalaryConfigurationQuery,
    SalaryInfoQuery,
};
use crate::models::users::entities::UserRole;
use crate::services::SalaryService;

pub async fn salary_info(
    service: web::Data<SalaryService>,
    caller: AuthUser,
    query: web::Query<SalaryInfoQuery>,
) -> ActixResult<HttpResponse> {
    let query = query.into_inner();
    respond(
        service
            .salary_information(&caller, query.username, query.month, query.year)
            .await,
        "Salary information retrieved",
    )
}

pub async fn modify_salary_configuration(
    service: web::Data<SalaryService>,
    caller: AuthUser,
    request: web::Json<ModifySalaryConfigurationRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        service
            .modify_salary_configuration(&caller, request.into_inner())
            .await,
        "Salary configuration updated",
    )
}

pub async fn salary_configuration(
    service: web::Data<SalaryService>,
    caller: AuthUser,
    query: web::Query<SalaryConfigurationQuery>,
) -> ActixResult<HttpResponse> {
    respond(
        service.salary_configuration(&caller, query.user_id).await,
        "Salary configuration retrieved",
    )
}

pub async fn compute_salary(
    service: web::Data<SalaryService>,
    caller: AuthUser,
    request: web::Json<ComputeSalaryRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        service
            .compute_salary(&caller, request.month, request.year)
            .await,
        "Salary computed",
    )
}

pub fn configure_salary_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/salary-info", web::get().to(salary_info))
        .route("/salary-configuration", web::get().to(salary_configuration))
        .service(
            web::resource("/modify-salary-configuration")
                .wrap(RequireRole::new_any(UserRole::elevated_roles()))
                .route(web::put().to(modify_salary_configuration)),
        )
        .service(
            web::resource("/compute-salary")
                .wrap(RequireRole::new_any(UserRole::elevated_roles()))
                .route(web::post().to(compute_salary)),
        );
}
