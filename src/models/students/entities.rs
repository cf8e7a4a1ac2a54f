use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "types/student.ts")]
pub struct Student {
    pub id: i64,
    pub student_name: String,
    pub dob: NaiveDate,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// 待写入的学生（已校验）
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
    pub student_name: String,
    pub dob: NaiveDate,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}
