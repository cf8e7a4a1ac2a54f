use actix_web::{HttpResponse, Result as ActixResult, web};

use super::{required, respond, respond_empty};
use crate::models::ApiResponse;
use crate::models::auth::entities::AuthUser;
use crate::models::users::requests::{
    ChangePasswordRequest, JobPositionQuery, ModifyUserInfoRequest, UserLookupRequest,
};
use crate::services::UserService;

pub async fn user_verification(
    service: web::Data<UserService>,
    caller: AuthUser,
    request: web::Json<UserLookupRequest>,
) -> ActixResult<HttpResponse> {
    Ok(match service.get_user(&caller, request.into_inner()).await {
        Ok(Some(user)) => HttpResponse::Ok().json(ApiResponse::success(user, "User found")),
        // 查无此人不是错误
        Ok(None) => HttpResponse::Ok().json(ApiResponse::success_empty("No matching user")),
        Err(e) => e.into_response(),
    })
}

pub async fn modify_user_info(
    service: web::Data<UserService>,
    caller: AuthUser,
    request: web::Json<ModifyUserInfoRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        service.modify_user_info(&caller, request.into_inner()).await,
        "Profile updated",
    )
}

pub async fn change_password(
    service: web::Data<UserService>,
    caller: AuthUser,
    request: web::Json<ChangePasswordRequest>,
) -> ActixResult<HttpResponse> {
    respond_empty(
        service.change_password(&caller, request.into_inner()).await,
        "Password changed",
    )
}

pub async fn sort_role(
    service: web::Data<UserService>,
    query: web::Query<JobPositionQuery>,
) -> ActixResult<HttpResponse> {
    let result = async {
        let position = required(query.into_inner().job_position, "job_position")?;
        service.users_by_job_position(&position).await
    }
    .await;
    respond(result, "Users retrieved")
}

pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/user-verification", web::post().to(user_verification))
        .route("/modify-user-info", web::put().to(modify_user_info))
        .route("/change-password", web::put().to(change_password))
        .route("/sort-role", web::get().to(sort_role));
}
