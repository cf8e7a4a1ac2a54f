use tracing::info;

use super::UserService;
use crate::errors::{HWSystemError, Result};
use crate::models::auth::entities::AuthUser;
use crate::models::users::requests::ChangePasswordRequest;
use crate::utils::password::{hash_password, verify_password};
use crate::utils::validate::validate_password_simple;

pub async fn change_password(
    service: &UserService,
    caller: &AuthUser,
    request: ChangePasswordRequest,
) -> Result<()> {
    validate_password_simple(&request.new_password).map_err(HWSystemError::validation)?;

    let user = service
        .storage()
        .get_user_by_id(caller.user_id)
        .await?
        .ok_or_else(|| HWSystemError::not_found(format!("User {} not found", caller.user_id)))?;

    if !verify_password(&request.old_password, &user.password_hash) {
        return Err(HWSystemError::authentication("Old password is incorrect"));
    }

    // 哈希计算较重，放到阻塞线程池
    let new_password = request.new_password;
    let hashed = tokio::task::spawn_blocking(move || hash_password(&new_password))
        .await
        .map_err(|e| HWSystemError::internal(format!("密码处理失败: {e}")))??;

    service
        .storage()
        .update_user_password(caller.user_id, hashed)
        .await?;

    info!("User {} changed password", caller.user_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;
    use crate::services::test_support::{caller, seed_user, storage};

    #[tokio::test]
    async fn old_password_must_match() {
        let storage = storage().await;
        let me = seed_user(&storage, "teacher1", "Tran Thi B").await;
        let service = UserService::new(storage.clone());
        let who = caller(me.id, UserRole::User);

        let err = service
            .change_password(
                &who,
                ChangePasswordRequest {
                    old_password: "WrongPass123".to_string(),
                    new_password: "BetterPass456".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E010");

        service
            .change_password(
                &who,
                ChangePasswordRequest {
                    old_password: "SecurePass123".to_string(),
                    new_password: "BetterPass456".to_string(),
                },
            )
            .await
            .unwrap();

        let stored = storage.get_user_by_id(me.id).await.unwrap().unwrap();
        assert!(verify_password("BetterPass456", &stored.password_hash));
    }

    #[tokio::test]
    async fn weak_new_password_is_rejected() {
        let storage = storage().await;
        let me = seed_user(&storage, "teacher1", "Tran Thi B").await;
        let service = UserService::new(storage);

        let err = service
            .change_password(
                &caller(me.id, UserRole::User),
                ChangePasswordRequest {
                    old_password: "SecurePass123".to_string(),
                    new_password: "short".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E005");
    }
}
