pub mod compute;
pub mod configuration;
pub mod report;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::auth::entities::AuthUser;
use crate::models::salaries::{
    entities::{EmployeeRate, SalaryReportLine},
    requests::ModifySalaryConfigurationRequest,
};
use crate::storage::Storage;

pub struct SalaryService {
    storage: Arc<dyn Storage>,
}

impl SalaryService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 按角色过滤的月度薪资报表
    pub async fn salary_information(
        &self,
        caller: &AuthUser,
        search_name: Option<String>,
        month: i64,
        year: i64,
    ) -> Result<Vec<SalaryReportLine>> {
        report::salary_information(self, caller, search_name, month, year).await
    }

    // 批量修改员工单价
    pub async fn modify_salary_configuration(
        &self,
        caller: &AuthUser,
        request: ModifySalaryConfigurationRequest,
    ) -> Result<Vec<EmployeeRate>> {
        configuration::modify_salary_configuration(self, caller, request).await
    }

    // 查询员工单价
    pub async fn salary_configuration(
        &self,
        caller: &AuthUser,
        user_id: Option<i64>,
    ) -> Result<Vec<EmployeeRate>> {
        configuration::salary_configuration(self, caller, user_id).await
    }

    // 重新结算某月薪资
    pub async fn compute_salary(
        &self,
        caller: &AuthUser,
        month: i64,
        year: i64,
    ) -> Result<Vec<SalaryReportLine>> {
        compute::compute_salary(self, caller, month, year).await
    }
}
