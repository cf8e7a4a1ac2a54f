use actix_web::{HttpResponse, Result as ActixResult, web};

use super::respond;
use crate::models::auth::entities::AuthUser;
use crate::models::payrolls::requests::CreatePayrollRequest;
use crate::services::PayrollService;

// GET 与 POST 共用路径，创建时的角色校验在服务层
pub async fn create_payroll(
    service: web::Data<PayrollService>,
    caller: AuthUser,
    request: web::Json<CreatePayrollRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        service
            .create_payroll_type(&caller, request.into_inner())
            .await,
        "Payroll type created",
    )
}

pub async fn list_payrolls(service: web::Data<PayrollService>) -> ActixResult<HttpResponse> {
    respond(service.list_payroll_types().await, "Payroll types retrieved")
}

pub fn configure_payroll_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/payrolls")
            .route(web::get().to(list_payrolls))
            .route(web::post().to(create_payroll)),
    );
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    use crate::models::users::entities::UserRole;
    use crate::routes::test_app::{bearer, configure, jwt};
    use crate::services::test_support::storage;

    #[actix_web::test]
    async fn create_requires_elevated_role() {
        let jwt = jwt();
        let user = bearer(&jwt, 3, UserRole::User);
        let admin = bearer(&jwt, 1, UserRole::Admin);
        let app = test::init_service(App::new().configure(configure(storage().await, jwt))).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/payrolls")
            .insert_header(user.clone())
            .set_json(json!({"type_name": "IELTS"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::post()
            .uri("/api/v1/payrolls")
            .insert_header(admin.clone())
            .set_json(json!({"type_name": "IELTS"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::post()
            .uri("/api/v1/payrolls")
            .insert_header(admin)
            .set_json(json!({"type_name": "IELTS"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let req = test::TestRequest::get()
            .uri("/api/v1/payrolls")
            .insert_header(user)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"][0]["type_name"], "IELTS");
    }
}
