use super::UserService;
use crate::errors::{HWSystemError, Result};
use crate::models::auth::entities::AuthUser;
use crate::models::users::entities::User;
use crate::models::users::requests::UserLookupRequest;
use crate::utils::validate::non_empty;

/// 依次按 id、用户名、邮箱查找，找不到返回 Ok(None)
///
/// 普通员工只能查到自己，其余结果（包括查无此人）一律 403
pub async fn get_user(
    service: &UserService,
    caller: &AuthUser,
    lookup: UserLookupRequest,
) -> Result<Option<User>> {
    let storage = service.storage();
    let scoped = !caller.is_elevated();

    // 按 id 查别人无需访问存储即可拒绝
    if scoped && lookup.id.is_some_and(|id| id != caller.user_id) {
        return Err(denied(caller));
    }

    let found = if let Some(id) = lookup.id {
        storage.get_user_by_id(id).await?
    } else if let Some(username) = non_empty(lookup.username) {
        storage.get_user_by_username(&username).await?
    } else if let Some(email) = non_empty(lookup.email) {
        storage.get_user_by_email(&email).await?
    } else {
        return Err(HWSystemError::validation(
            "One of id, username or email is required",
        ));
    };

    if scoped && found.as_ref().map(|u| u.id) != Some(caller.user_id) {
        return Err(denied(caller));
    }
    Ok(found)
}

fn denied(caller: &AuthUser) -> HWSystemError {
    tracing::info!("User {} denied: look up another user", caller.user_id);
    HWSystemError::authorization("Only leaders or admins can look up other users")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;
    use crate::services::test_support::{caller, seed_user, storage};

    #[tokio::test]
    async fn lookup_by_each_key() {
        let storage = storage().await;
        let user = seed_user(&storage, "teacher1", "Tran Thi B").await;
        let service = UserService::new(storage);
        let admin = caller(100, UserRole::Admin);

        let by_name = service
            .get_user(
                &admin,
                UserLookupRequest {
                    username: Some("teacher1".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(by_name.map(|u| u.id), Some(user.id));

        let by_email = service
            .get_user(
                &admin,
                UserLookupRequest {
                    email: Some("teacher1@center.test".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(by_email.map(|u| u.id), Some(user.id));

        let missing = service
            .get_user(
                &admin,
                UserLookupRequest {
                    id: Some(999),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(missing.is_none());

        let err = service
            .get_user(&admin, UserLookupRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E005");
    }

    #[tokio::test]
    async fn plain_user_only_finds_self() {
        let storage = storage().await;
        let me = seed_user(&storage, "teacher1", "Tran Thi B").await;
        let other = seed_user(&storage, "teacher2", "Le Van C").await;
        let service = UserService::new(storage);
        let me_caller = caller(me.id, UserRole::User);

        let own = service
            .get_user(
                &me_caller,
                UserLookupRequest {
                    username: Some("teacher1".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(own.map(|u| u.id), Some(me.id));

        let by_id = service
            .get_user(
                &me_caller,
                UserLookupRequest {
                    id: Some(other.id),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(by_id.code(), "E011");

        let by_email = service
            .get_user(
                &me_caller,
                UserLookupRequest {
                    email: Some("teacher2@center.test".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(by_email.code(), "E011");

        // 查无此人也不泄露
        let unknown = service
            .get_user(
                &me_caller,
                UserLookupRequest {
                    username: Some("nobody".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(unknown.code(), "E011");
    }
}
