use super::SalaryService;
use crate::errors::Result;
use crate::models::auth::entities::AuthUser;
use crate::models::salaries::entities::SalaryReportLine;
use crate::utils::validate::{non_empty, validate_period};

/// 普通员工只能看到自己的记录，忽略客户端传来的姓名；
/// 主管/管理员可按姓名做不区分大小写的子串匹配。
pub async fn salary_information(
    service: &SalaryService,
    caller: &AuthUser,
    search_name: Option<String>,
    month: i64,
    year: i64,
) -> Result<Vec<SalaryReportLine>> {
    let period = validate_period(month, year)?;

    if !caller.is_elevated() {
        return service
            .storage()
            .list_salary_report(period, Some(caller.user_id))
            .await;
    }

    let lines = service.storage().list_salary_report(period, None).await?;
    let Some(needle) = non_empty(search_name).map(|n| n.to_lowercase()) else {
        return Ok(lines);
    };

    Ok(lines
        .into_iter()
        .filter(|line| line.full_name.to_lowercase().contains(&needle))
        .collect())
}
