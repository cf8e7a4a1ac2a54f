use std::collections::HashSet;

use tracing::info;

use super::AttendanceService;
use crate::errors::{HWSystemError, Result};
use crate::models::attendance::{entities::Attendance, requests::RecordAttendanceRequest};
use crate::models::auth::entities::AuthUser;
use crate::services::load_owned_class;

pub async fn record_attendance(
    service: &AttendanceService,
    caller: &AuthUser,
    request: RecordAttendanceRequest,
) -> Result<Vec<Attendance>> {
    if request.entries.is_empty() {
        return Err(HWSystemError::validation("entries must not be empty"));
    }
    let mut seen = HashSet::new();
    if let Some(dup) = request.entries.iter().find(|e| !seen.insert(e.student_id)) {
        return Err(HWSystemError::validation(format!(
            "Student {} appears more than once",
            dup.student_id
        )));
    }

    load_owned_class(service.storage(), caller, request.class_id, "record attendance").await?;

    let saved = service
        .storage()
        .record_attendance(request.class_id, request.entries)
        .await?;

    info!(
        "User {} recorded attendance of {} student(s) for class {}",
        caller.user_id,
        saved.len(),
        request.class_id
    );
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use crate::models::attendance::{
        entities::AttendanceStatus,
        requests::{AttendanceEntry, RecordAttendanceRequest},
    };
    use crate::models::courses::entities::NewClassSession;
    use crate::models::students::entities::NewStudent;
    use crate::models::users::entities::UserRole;
    use crate::services::AttendanceService;
    use crate::services::test_support::{caller, date, seed_course, seed_user, storage};

    #[tokio::test]
    async fn records_and_rerecords_roster() {
        let storage = storage().await;
        let (teacher_id, _, course_id) = seed_course(&storage).await;
        let class = storage
            .create_class_session(NewClassSession {
                course_id,
                teacher_id,
                class_date: date(2024, 3, 4),
                start_time: None,
                end_time: None,
                room: None,
                note: None,
            })
            .await
            .unwrap();
        let student = storage
            .enroll_student(
                course_id,
                NewStudent {
                    student_name: "Nguyen Van A".to_string(),
                    dob: date(1999, 5, 2),
                    email: None,
                    phone_number: None,
                },
            )
            .await
            .unwrap();
        let service = AttendanceService::new(storage);
        let teacher = caller(teacher_id, UserRole::User);

        let entry = |status| RecordAttendanceRequest {
            class_id: class.id,
            entries: vec![AttendanceEntry {
                student_id: student.id,
                status,
            }],
        };

        let first = service
            .record_attendance(&teacher, entry(AttendanceStatus::Absent))
            .await
            .unwrap();
        let second = service
            .record_attendance(&teacher, entry(AttendanceStatus::Late))
            .await
            .unwrap();
        assert_eq!(first[0].id, second[0].id);
        assert_eq!(second[0].status, AttendanceStatus::Late);
    }

    #[tokio::test]
    async fn rejects_empty_and_duplicate_entries() {
        let service = AttendanceService::new(storage().await);
        let teacher = caller(1, UserRole::User);

        let err = service
            .record_attendance(
                &teacher,
                RecordAttendanceRequest {
                    class_id: 1,
                    entries: vec![],
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E005");

        let entry = AttendanceEntry {
            student_id: 3,
            status: AttendanceStatus::Present,
        };
        let err = service
            .record_attendance(
                &teacher,
                RecordAttendanceRequest {
                    class_id: 1,
                    entries: vec![entry.clone(), entry],
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E005");
    }

    #[tokio::test]
    async fn unknown_class_is_not_found() {
        let service = AttendanceService::new(storage().await);
        let err = service
            .record_attendance(
                &caller(1, UserRole::User),
                RecordAttendanceRequest {
                    class_id: 404,
                    entries: vec![AttendanceEntry {
                        student_id: 1,
                        status: AttendanceStatus::Present,
                    }],
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E006");
    }

    #[tokio::test]
    async fn only_class_teacher_or_leader_records() {
        let storage = storage().await;
        let (teacher_id, _, course_id) = seed_course(&storage).await;
        let other = seed_user(&storage, "teacher2", "Le Van C").await;
        let class = storage
            .create_class_session(NewClassSession {
                course_id,
                teacher_id,
                class_date: date(2024, 3, 4),
                start_time: None,
                end_time: None,
                room: None,
                note: None,
            })
            .await
            .unwrap();
        let student = storage
            .enroll_student(
                course_id,
                NewStudent {
                    student_name: "Nguyen Van A".to_string(),
                    dob: date(1999, 5, 2),
                    email: None,
                    phone_number: None,
                },
            )
            .await
            .unwrap();
        let service = AttendanceService::new(storage.clone());
        let request = || RecordAttendanceRequest {
            class_id: class.id,
            entries: vec![AttendanceEntry {
                student_id: student.id,
                status: AttendanceStatus::Present,
            }],
        };

        let err = service
            .record_attendance(&caller(other.id, UserRole::User), request())
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E011");
        // 被拒绝时没有写入任何出勤
        let missing = storage
            .update_attendance_status(class.id, student.id, AttendanceStatus::Late)
            .await
            .unwrap_err();
        assert_eq!(missing.code(), "E006");

        let saved = service
            .record_attendance(&caller(other.id, UserRole::Leader), request())
            .await
            .unwrap();
        assert_eq!(saved.len(), 1);
    }
}
