use serde::Deserialize;
use ts_rs::TS;

// 用户登录请求（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "types/auth.ts")]
pub struct LoginRequest {
    /// 用户名或邮箱
    pub username: String,
    /// 密码
    pub password: String,
}

// 注册请求，新账号角色固定为 user
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "types/auth.ts")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub job_position: Option<String>,
    pub gender: Option<String>,
    /// YYYY-MM-DD
    pub dob: Option<String>,
    /// YYYY-MM-DD
    pub start_date: Option<String>,
}
