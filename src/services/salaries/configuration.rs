use tracing::info;

use super::SalaryService;
use crate::errors::{HWSystemError, Result};
use crate::models::auth::entities::AuthUser;
use crate::models::salaries::{
    entities::EmployeeRate, requests::ModifySalaryConfigurationRequest,
};
use crate::services::ensure_elevated;

/// 顺序：角色 -> 参数 -> 目标用户存在 -> 单事务写入
pub async fn modify_salary_configuration(
    service: &SalaryService,
    caller: &AuthUser,
    request: ModifySalaryConfigurationRequest,
) -> Result<Vec<EmployeeRate>> {
    ensure_elevated(caller, "modify salary configuration")?;

    if request.rates.is_empty() {
        return Err(HWSystemError::validation("rates must not be empty"));
    }
    if let Some(bad) = request
        .rates
        .iter()
        .find(|r| !r.rate.is_finite() || r.rate < 0.0)
    {
        return Err(HWSystemError::validation(format!(
            "Invalid rate {} for payroll type {}",
            bad.rate, bad.payroll_id
        )));
    }

    if service
        .storage()
        .get_user_by_id(request.user_id)
        .await?
        .is_none()
    {
        return Err(HWSystemError::not_found(format!(
            "User {} not found",
            request.user_id
        )));
    }

    let count = request.rates.len();
    let saved = service
        .storage()
        .upsert_employee_rates(request.user_id, request.rates)
        .await?;

    info!(
        "User {} updated {} rate(s) of user {}",
        caller.user_id, count, request.user_id
    );
    Ok(saved)
}

/// 普通员工只能查看自己的单价
pub async fn salary_configuration(
    service: &SalaryService,
    caller: &AuthUser,
    user_id: Option<i64>,
) -> Result<Vec<EmployeeRate>> {
    let target = user_id.unwrap_or(caller.user_id);
    if target != caller.user_id {
        ensure_elevated(caller, "view other users' salary configuration")?;
    }
    service.storage().list_employee_rates(target).await
}
