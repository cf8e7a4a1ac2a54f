use tracing::info;

use super::AuthService;
use crate::errors::{HWSystemError, Result};
use crate::models::auth::requests::RegisterRequest;
use crate::models::users::entities::{NewUser, User, UserRole};
use crate::utils::password::hash_password;
use crate::utils::validate::{
    non_empty, parse_date, validate_email, validate_password_simple, validate_username,
};

/// 注册新账号，角色固定为 user
pub async fn handle_register(service: &AuthService, request: RegisterRequest) -> Result<User> {
    let storage = service.storage();
    let username = request.username.trim().to_string();
    let email = request.email.trim().to_string();

    // 验证用户名、邮箱与密码策略
    validate_username(&username).map_err(HWSystemError::validation)?;
    validate_email(&email).map_err(HWSystemError::validation)?;
    validate_password_simple(&request.password).map_err(HWSystemError::validation)?;

    let full_name = request.full_name.trim().to_string();
    if full_name.is_empty() {
        return Err(HWSystemError::validation("full_name must not be empty"));
    }

    let dob = non_empty(request.dob)
        .map(|d| parse_date(&d, "dob"))
        .transpose()?;
    let start_date = non_empty(request.start_date)
        .map(|d| parse_date(&d, "start_date"))
        .transpose()?;

    // 检查用户名与邮箱是否已存在
    if storage.get_user_by_username(&username).await?.is_some() {
        return Err(HWSystemError::conflict("Username already exists"));
    }
    if storage.get_user_by_email(&email).await?.is_some() {
        return Err(HWSystemError::conflict("Email already exists"));
    }

    let password = request.password;
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| HWSystemError::internal(format!("密码处理失败: {e}")))??;

    let user = storage
        .create_user(NewUser {
            username,
            email,
            password_hash,
            role: UserRole::User,
            job_position: non_empty(request.job_position),
            full_name,
            gender: non_empty(request.gender),
            dob,
            start_date,
        })
        .await?;

    info!("User {} registered (ID: {})", user.username, user.id);
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JwtConfig;
    use crate::services::test_support::storage;
    use crate::utils::jwt::JwtUtils;

    fn request(username: &str, email: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: "SecurePass123".to_string(),
            full_name: "Nguyen Van A".to_string(),
            job_position: Some("TA".to_string()),
            gender: None,
            dob: Some("1999-05-02".to_string()),
            start_date: None,
        }
    }

    fn service(storage: std::sync::Arc<dyn crate::storage::Storage>) -> AuthService {
        AuthService::new(
            storage,
            JwtUtils::new(&JwtConfig {
                secret: "s".to_string(),
                access_token_expiry: 5,
            }),
        )
    }

    #[tokio::test]
    async fn registers_plain_user_and_rejects_duplicates() {
        let service = service(storage().await);

        let user = service
            .register(request("newteacher", "a@center.test"))
            .await
            .unwrap();
        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.job_position.as_deref(), Some("TA"));

        let err = service
            .register(request("newteacher", "b@center.test"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E007");

        let err = service
            .register(request("another1", "a@center.test"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E007");
    }

    #[tokio::test]
    async fn rejects_invalid_username() {
        let service = service(storage().await);
        let err = service
            .register(request("a b", "c@center.test"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E005");
    }
}
