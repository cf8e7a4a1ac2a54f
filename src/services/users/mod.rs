pub mod get;
pub mod password;
pub mod position;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::auth::entities::AuthUser;
use crate::models::users::entities::User;
use crate::models::users::requests::{
    ChangePasswordRequest, ModifyUserInfoRequest, UserLookupRequest,
};
use crate::storage::Storage;

pub struct UserService {
    storage: Arc<dyn Storage>,
}

impl UserService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 按 id / 用户名 / 邮箱查找用户
    pub async fn get_user(
        &self,
        caller: &AuthUser,
        lookup: UserLookupRequest,
    ) -> Result<Option<User>> {
        get::get_user(self, caller, lookup).await
    }

    // 修改本人资料
    pub async fn modify_user_info(
        &self,
        caller: &AuthUser,
        request: ModifyUserInfoRequest,
    ) -> Result<User> {
        update::modify_user_info(self, caller, request).await
    }

    // 修改本人密码
    pub async fn change_password(
        &self,
        caller: &AuthUser,
        request: ChangePasswordRequest,
    ) -> Result<()> {
        password::change_password(self, caller, request).await
    }

    // 按岗位列出员工
    pub async fn users_by_job_position(&self, position: &str) -> Result<Vec<User>> {
        position::users_by_job_position(self, position).await
    }
}
