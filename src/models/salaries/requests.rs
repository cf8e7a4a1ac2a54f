use serde::Deserialize;
use ts_rs::TS;

// 薪资查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "types/salary.ts")]
pub struct SalaryInfoQuery {
    pub month: i64,
    pub year: i64,
    /// 姓名筛选，仅主管/管理员生效
    pub username: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "types/salary.ts")]
pub struct RateEntry {
    pub payroll_id: i64,
    pub rate: f64,
}

// 批量修改员工单价
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "types/salary.ts")]
pub struct ModifySalaryConfigurationRequest {
    pub user_id: i64,
    pub rates: Vec<RateEntry>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "types/salary.ts")]
pub struct SalaryConfigurationQuery {
    /// 缺省为当前用户
    pub user_id: Option<i64>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "types/salary.ts")]
pub struct ComputeSalaryRequest {
    pub month: i64,
    pub year: i64,
}
