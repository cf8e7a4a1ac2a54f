use super::entities::Student;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "types/student.ts")]
pub struct ImportStudentsResponse {
    pub course_id: i64,
    pub imported: usize,
    pub students: Vec<Student>,
}
