use crate::models::users::entities::UserRole;

/// 已认证的当前用户，由 RequireJWT 从 access token 推导
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub user_id: i64,
    pub role: UserRole,
    pub full_name: String,
}

impl AuthUser {
    pub fn is_elevated(&self) -> bool {
        self.role.is_elevated()
    }
}
