pub mod attendance;
pub mod auth;
pub mod courses;
pub mod payrolls;
pub mod salaries;
pub mod students;
pub mod users;

use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Serialize;
use ts_rs::TS;

use crate::errors::{HWSystemError, Result};
use crate::middlewares;
use crate::models::ApiResponse;

/// 挂载 `/api/v1` 下的全部路由
///
/// 登录与注册公开；其余接口都需要有效的访问令牌，
/// 修改共享配置的接口再叠加角色校验。
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(auth::configure_auth_routes)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .configure(users::configure_user_routes)
                    .configure(salaries::configure_salary_routes)
                    .configure(students::configure_student_routes)
                    .configure(courses::configure_course_routes)
                    .configure(attendance::configure_attendance_routes)
                    .configure(payrolls::configure_payroll_routes),
            ),
    );
}

/// 服务层结果转换为统一响应
pub(crate) fn respond<T: Serialize + TS>(result: Result<T>, message: &str) -> ActixResult<HttpResponse> {
    Ok(match result {
        Ok(data) => HttpResponse::Ok().json(ApiResponse::success(data, message)),
        Err(e) => e.into_response(),
    })
}

/// 无返回数据的操作
pub(crate) fn respond_empty(result: Result<()>, message: &str) -> ActixResult<HttpResponse> {
    Ok(match result {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success_empty(message)),
        Err(e) => e.into_response(),
    })
}

/// 必填查询参数，缺失时在调用服务之前返回 400
pub(crate) fn required<T>(value: Option<T>, name: &str) -> Result<T> {
    value.ok_or_else(|| HWSystemError::validation(format!("Missing required query parameter: {name}")))
}
