use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "types/payroll.ts")]
pub struct CreatePayrollRequest {
    pub type_name: String,
    pub description: Option<String>,
}
