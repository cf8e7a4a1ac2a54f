use serde::Deserialize;
use ts_rs::TS;

// 新建课程请求，日期 YYYY-MM-DD，时间 HH:MM
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "types/course.ts")]
pub struct CreateCourseRequest {
    pub course_name: String,
    pub payroll_id: i64,
    pub teacher_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub study_days: Option<String>,
    pub location: Option<String>,
}

// 新建课时请求，teacher_id 缺省为课程主讲
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "types/course.ts")]
pub struct CreateClassRequest {
    pub course_id: i64,
    pub teacher_id: Option<i64>,
    pub class_date: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub room: Option<String>,
    pub note: Option<String>,
}

// 课时 ID 查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "types/course.ts")]
pub struct ClassIdQuery {
    pub class_id: Option<i64>,
}

// 课时备注，空字符串清除备注
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "types/course.ts")]
pub struct ClassNoteRequest {
    pub class_id: i64,
    pub note: Option<String>,
}

// 课表查询，日期 YYYY-MM-DD，闭区间
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "types/course.ts")]
pub struct ScheduleQuery {
    pub user_id: Option<i64>,
    pub from: Option<String>,
    pub to: Option<String>,
}
