use serde::Deserialize;
use ts_rs::TS;

// 单个学生录入请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "types/student.ts")]
pub struct AddStudentRequest {
    #[serde(alias = "name")]
    pub student_name: String,
    /// YYYY-MM-DD
    pub dob: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

// 课程 ID 查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "types/student.ts")]
pub struct CourseIdQuery {
    pub course_id: Option<i64>,
}

// 学生 ID 查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "types/student.ts")]
pub struct StudentIdQuery {
    pub student_id: Option<i64>,
}
