use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "types/course.ts")]
pub struct Course {
    pub id: i64,
    pub course_name: String,
    pub payroll_id: i64,
    pub teacher_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub study_days: Option<String>,
    pub location: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 课时（一次上课）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "types/course.ts")]
pub struct ClassSession {
    pub id: i64,
    pub course_id: i64,
    pub teacher_id: i64,
    pub class_date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub room: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewCourse {
    pub course_name: String,
    pub payroll_id: i64,
    pub teacher_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub study_days: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewClassSession {
    pub course_id: i64,
    pub teacher_id: i64,
    pub class_date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub room: Option<String>,
    pub note: Option<String>,
}
