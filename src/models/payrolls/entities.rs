use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 薪资类型（例如某类课程的课时费）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "types/payroll.ts")]
pub struct PayrollType {
    pub id: i64,
    pub type_name: String,
    pub description: Option<String>,
}
