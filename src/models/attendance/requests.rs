use super::entities::AttendanceStatus;
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "types/attendance.ts")]
pub struct AttendanceEntry {
    pub student_id: i64,
    pub status: AttendanceStatus,
}

// 点名：一次提交一个课时的全部出勤
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "types/attendance.ts")]
pub struct RecordAttendanceRequest {
    pub class_id: i64,
    pub entries: Vec<AttendanceEntry>,
}

// 修正单条出勤
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "types/attendance.ts")]
pub struct FixAttendanceRequest {
    pub class_id: i64,
    pub student_id: i64,
    pub status: AttendanceStatus,
}
