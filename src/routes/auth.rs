use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::models::ApiResponse;
use crate::models::auth::requests::{LoginRequest, RegisterRequest};
use crate::services::AuthService;

pub async fn login(
    service: web::Data<AuthService>,
    request: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    super::respond(service.login(request.into_inner()).await, "Login successful")
}

pub async fn register(
    service: web::Data<AuthService>,
    request: web::Json<RegisterRequest>,
) -> ActixResult<HttpResponse> {
    Ok(match service.register(request.into_inner()).await {
        Ok(user) => {
            HttpResponse::Created().json(ApiResponse::success(user, "Registration successful"))
        }
        Err(e) => e.into_response(),
    })
}

// 公开路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/login", web::post().to(login))
        .route("/register", web::post().to(register));
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    use crate::routes::test_app::{configure, jwt};
    use crate::services::test_support::{seed_user, storage};

    #[actix_web::test]
    async fn login_then_use_token() {
        let storage = storage().await;
        seed_user(&storage, "teacher1", "Tran Thi B").await;
        let app = test::init_service(App::new().configure(configure(storage, jwt()))).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({"username": "teacher1", "password": "wrong-Pass1"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({"username": "teacher1", "password": "SecurePass123"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["code"], 0);
        let token = body["data"]["access_token"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri("/api/v1/all-courses")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn malformed_body_is_bad_request() {
        let app = test::init_service(App::new().configure(configure(storage().await, jwt()))).await;
        let req = test::TestRequest::post()
            .uri("/api/v1/login")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
