use tracing::info;

use super::UserService;
use crate::errors::{HWSystemError, Result};
use crate::models::auth::entities::AuthUser;
use crate::models::users::entities::{ProfileUpdate, User};
use crate::models::users::requests::ModifyUserInfoRequest;
use crate::utils::validate::{parse_date, validate_email};

/// 只修改调用者本人，用户 ID 取自 token 而不是请求体
pub async fn modify_user_info(
    service: &UserService,
    caller: &AuthUser,
    request: ModifyUserInfoRequest,
) -> Result<User> {
    let email = request.email.trim().to_string();
    validate_email(&email).map_err(HWSystemError::validation)?;
    let dob = parse_date(&request.dob, "dob")?;

    let full_name = request.full_name.trim().to_string();
    if full_name.is_empty() {
        return Err(HWSystemError::validation("full_name must not be empty"));
    }

    // 邮箱唯一
    let owner = service.storage().get_user_by_email(&email).await?;
    if owner.is_some_and(|owner| owner.id != caller.user_id) {
        return Err(HWSystemError::conflict("Email already exists"));
    }

    let user = service
        .storage()
        .update_user_profile(
            caller.user_id,
            ProfileUpdate {
                email,
                dob,
                full_name,
                gender: request.gender.trim().to_string(),
            },
        )
        .await?;

    info!("User {} updated own profile", caller.user_id);
    Ok(user)
}
