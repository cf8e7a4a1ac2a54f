use super::UserService;
use crate::errors::{HWSystemError, Result};
use crate::models::users::entities::{JobPosition, User};

/// 岗位只接受 Teacher / TA，校验在查询之前
pub async fn users_by_job_position(service: &UserService, position: &str) -> Result<Vec<User>> {
    let position = position
        .parse::<JobPosition>()
        .map_err(HWSystemError::validation)?;
    service.storage().list_users_by_job_position(position).await
}
