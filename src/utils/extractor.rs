//! 自定义提取器

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};

use crate::middlewares::{RequireJWT, create_error_response};
use crate::models::ErrorCode;
use crate::models::auth::entities::AuthUser;

/// 从请求扩展中取出 RequireJWT 写入的当前用户，缺失时返回 401
impl FromRequest for AuthUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = RequireJWT::extract_auth_user(req).ok_or_else(|| {
            actix_web::error::InternalError::from_response(
                "missing authenticated user",
                create_error_response(
                    actix_web::http::StatusCode::UNAUTHORIZED,
                    ErrorCode::Unauthorized,
                    "Authentication required",
                ),
            )
            .into()
        });
        ready(result)
    }
}
