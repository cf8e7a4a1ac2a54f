use std::collections::HashSet;

use super::SeaOrmStorage;
use crate::entity::prelude::{Attendances, Classes, CourseStudents};
use crate::entity::{attendances, course_students};
use crate::errors::{HWSystemError, Result};
use crate::models::attendance::{
    entities::{Attendance, AttendanceStatus},
    requests::AttendanceEntry,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 记录一次课时的出勤
    pub async fn record_attendance_impl(
        &self,
        class_id: i64,
        entries: Vec<AttendanceEntry>,
    ) -> Result<Vec<Attendance>> {
        self.transaction(move |txn| {
            Box::pin(async move {
                let class = Classes::find_by_id(class_id)
                    .one(txn)
                    .await?
                    .ok_or_else(|| HWSystemError::not_found(format!("Class {class_id} not found")))?;

                let roster: HashSet<i64> = CourseStudents::find()
                    .filter(course_students::Column::CourseId.eq(class.course_id))
                    .all(txn)
                    .await?
                    .into_iter()
                    .map(|m| m.student_id)
                    .collect();

                if let Some(outsider) = entries.iter().find(|e| !roster.contains(&e.student_id)) {
                    return Err(HWSystemError::validation(format!(
                        "Student {} is not enrolled in course {}",
                        outsider.student_id, class.course_id
                    )));
                }

                let now = chrono::Utc::now().timestamp();
                let mut saved = Vec::with_capacity(entries.len());
                for entry in entries {
                    let existing = Attendances::find()
                        .filter(attendances::Column::ClassId.eq(class_id))
                        .filter(attendances::Column::StudentId.eq(entry.student_id))
                        .one(txn)
                        .await?;

                    let model = match existing {
                        Some(row) => {
                            let mut active: attendances::ActiveModel = row.into();
                            active.status = Set(entry.status.to_string());
                            active.updated_at = Set(now);
                            active.update(txn).await?
                        }
                        None => {
                            attendances::ActiveModel {
                                class_id: Set(class_id),
                                student_id: Set(entry.student_id),
                                status: Set(entry.status.to_string()),
                                updated_at: Set(now),
                                ..Default::default()
                            }
                            .insert(txn)
                            .await?
                        }
                    };
                    saved.push(model.into_attendance());
                }

                Ok(saved)
            })
        })
        .await
    }

    /// 修改单条出勤状态，记录必须已存在
    pub async fn update_attendance_status_impl(
        &self,
        class_id: i64,
        student_id: i64,
        status: AttendanceStatus,
    ) -> Result<Attendance> {
        self.transaction(move |txn| {
            Box::pin(async move {
                let existing = Attendances::find()
                    .filter(attendances::Column::ClassId.eq(class_id))
                    .filter(attendances::Column::StudentId.eq(student_id))
                    .one(txn)
                    .await?
                    .ok_or_else(|| {
                        HWSystemError::not_found(format!(
                            "No attendance record for student {student_id} in class {class_id}"
                        ))
                    })?;

                let mut active: attendances::ActiveModel = existing.into();
                active.status = Set(status.to_string());
                active.updated_at = Set(chrono::Utc::now().timestamp());
                let updated = active.update(txn).await?;

                Ok(updated.into_attendance())
            })
        })
        .await
    }
}
