use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 薪资报表行：薪资记录 + 用户 + 薪资类型
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "types/salary.ts")]
pub struct SalaryReportLine {
    pub user_id: i64,
    pub username: String,
    pub full_name: String,
    pub gender: Option<String>,
    pub job_position: Option<String>,
    pub payroll_id: i64,
    pub type_payroll: String,
    pub month: i32,
    pub year: i32,
    pub total_work_dates: i64,
    pub payroll_rate: f64,
    pub salary: f64,
}

// 员工在某薪资类型下的单价
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "types/salary.ts")]
pub struct EmployeeRate {
    pub user_id: i64,
    pub payroll_id: i64,
    pub rate: f64,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 单条薪资记录（结算写入用）
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryLine {
    pub user_id: i64,
    pub payroll_id: i64,
    pub month: i32,
    pub year: i32,
    pub total_work_dates: i64,
    pub payroll_rate: f64,
    pub salary: f64,
}

/// 结算周期
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryPeriod {
    pub month: i32,
    pub year: i32,
}
