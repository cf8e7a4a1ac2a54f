use serde::Deserialize;
use ts_rs::TS;

// 用户查找请求，三个字段任选其一
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "types/user.ts")]
pub struct UserLookupRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub id: Option<i64>,
}

// 个人资料修改请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "types/user.ts")]
pub struct ModifyUserInfoRequest {
    pub email: String,
    /// YYYY-MM-DD
    pub dob: String,
    pub full_name: String,
    pub gender: String,
}

// 修改密码请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "types/user.ts")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

// 按岗位筛选
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "types/user.ts")]
pub struct JobPositionQuery {
    pub job_position: Option<String>,
}
