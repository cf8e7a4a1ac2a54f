use super::{SeaOrmStorage, map_write_err};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{HWSystemError, Result};
use crate::models::users::entities::{JobPosition, NewUser, ProfileUpdate, User};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, req: NewUser) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            username: Set(req.username),
            email: Set(req.email),
            password_hash: Set(req.password_hash),
            role: Set(req.role.to_string()),
            job_position: Set(req.job_position),
            full_name: Set(req.full_name),
            gender: Set(req.gender),
            dob: Set(req.dob),
            start_date: Set(req.start_date),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_write_err(e, "创建用户失败", "Username or email already exists"))?;

        Ok(result.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| HWSystemError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过用户名获取用户
    pub async fn get_user_by_username_impl(&self, username: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| HWSystemError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过邮箱获取用户
    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| HWSystemError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过用户名或邮箱获取用户
    pub async fn get_user_by_username_or_email_impl(
        &self,
        identifier: &str,
    ) -> Result<Option<User>> {
        let result = Users::find()
            .filter(
                Condition::any()
                    .add(Column::Username.eq(identifier))
                    .add(Column::Email.eq(identifier)),
            )
            .one(&self.db)
            .await
            .map_err(|e| HWSystemError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 用户总数
    pub async fn count_users_impl(&self) -> Result<u64> {
        Users::find()
            .count(&self.db)
            .await
            .map_err(|e| HWSystemError::database_operation(format!("统计用户失败: {e}")))
    }

    /// 按岗位列出用户
    pub async fn list_users_by_job_position_impl(
        &self,
        position: JobPosition,
    ) -> Result<Vec<User>> {
        let users = Users::find()
            .filter(Column::JobPosition.eq(position.as_str()))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| HWSystemError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(users.into_iter().map(|m| m.into_user()).collect())
    }

    /// 覆盖个人资料
    pub async fn update_user_profile_impl(&self, id: i64, update: ProfileUpdate) -> Result<User> {
        let existing = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| HWSystemError::database_operation(format!("查询用户失败: {e}")))?
            .ok_or_else(|| HWSystemError::not_found(format!("User {id} not found")))?;

        let mut model: ActiveModel = existing.into();
        model.email = Set(update.email);
        model.dob = Set(Some(update.dob));
        model.full_name = Set(update.full_name);
        model.gender = Set(Some(update.gender));
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| map_write_err(e, "更新用户失败", "Email already in use"))?;

        Ok(result.into_user())
    }

    /// 更新密码
    pub async fn update_user_password_impl(&self, id: i64, password_hash: String) -> Result<()> {
        self.transaction(move |txn| {
            Box::pin(async move {
                let existing = Users::find_by_id(id)
                    .one(txn)
                    .await?
                    .ok_or_else(|| HWSystemError::not_found(format!("User {id} not found")))?;

                let mut model: ActiveModel = existing.into();
                model.password_hash = Set(password_hash);
                model.updated_at = Set(chrono::Utc::now().timestamp());
                model.update(txn).await?;
                Ok(())
            })
        })
        .await
    }
}
