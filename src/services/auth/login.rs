use tracing::{error, info};

use super::AuthService;
use crate::errors::{HWSystemError, Result};
use crate::models::auth::{requests::LoginRequest, responses::LoginResponse};
use crate::utils::password::verify_password;

pub async fn handle_login(service: &AuthService, request: LoginRequest) -> Result<LoginResponse> {
    // 1. 根据用户名或邮箱获取用户信息
    let user = service
        .storage()
        .get_user_by_username_or_email(request.username.trim())
        .await?;

    // 2. 验证密码，用户不存在与密码错误返回同一信息
    let user = match user {
        Some(user) if verify_password(&request.password, &user.password_hash) => user,
        _ => {
            info!("Login failed for {}", request.username);
            return Err(HWSystemError::authentication(
                "Username or password is incorrect",
            ));
        }
    };

    // 3. 签发 access token
    let access_token = service
        .jwt()
        .generate_access_token(user.id, user.role, &user.full_name)
        .map_err(|e| {
            error!("Failed to generate JWT token: {}", e);
            HWSystemError::internal(format!("token generation failed: {e}"))
        })?;

    info!("User {} logged in successfully", user.username);

    Ok(LoginResponse {
        access_token,
        expires_in: service.jwt().access_token_expiry_secs(),
        user,
    })
}

#[cfg(test)]
mod tests {
    use crate::config::JwtConfig;
    use crate::models::auth::requests::LoginRequest;
    use crate::services::AuthService;
    use crate::services::test_support::{seed_user, storage};
    use crate::utils::jwt::JwtUtils;

    fn jwt() -> JwtUtils {
        JwtUtils::new(&JwtConfig {
            secret: "login-secret".to_string(),
            access_token_expiry: 60,
        })
    }

    #[tokio::test]
    async fn login_issues_token_with_identity() {
        let storage = storage().await;
        let user = seed_user(&storage, "teacher1", "Tran Thi B").await;
        let service = AuthService::new(storage, jwt());

        let response = service
            .login(LoginRequest {
                username: "teacher1@center.test".to_string(),
                password: "SecurePass123".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(response.expires_in, 3600);

        let auth = jwt()
            .verify_access_token(&response.access_token)
            .unwrap()
            .to_auth_user()
            .unwrap();
        assert_eq!(auth.user_id, user.id);
        assert_eq!(auth.full_name, "Tran Thi B");
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let storage = storage().await;
        seed_user(&storage, "teacher1", "Tran Thi B").await;
        let service = AuthService::new(storage, jwt());

        for (username, password) in [("teacher1", "nope"), ("ghost", "SecurePass123")] {
            let err = service
                .login(LoginRequest {
                    username: username.to_string(),
                    password: password.to_string(),
                })
                .await
                .unwrap_err();
            assert_eq!(err.code(), "E010");
        }
    }
}
