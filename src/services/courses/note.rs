use tracing::info;

use super::CourseService;
use crate::errors::Result;
use crate::models::auth::entities::AuthUser;
use crate::models::courses::{entities::ClassSession, requests::ClassNoteRequest};
use crate::services::{ensure_elevated, load_owned_class};
use crate::utils::validate::non_empty;

/// 空白备注视为清除
pub async fn add_class_note(
    service: &CourseService,
    caller: &AuthUser,
    request: ClassNoteRequest,
) -> Result<ClassSession> {
    load_owned_class(service.storage(), caller, request.class_id, "note classes").await?;

    let session = service
        .storage()
        .update_class_note(request.class_id, non_empty(request.note))
        .await?;
    info!("User {} noted class {}", caller.user_id, session.id);
    Ok(session)
}

/// 删除课时，该课时的出勤一并删除
pub async fn delete_class_session(
    service: &CourseService,
    caller: &AuthUser,
    class_id: i64,
) -> Result<()> {
    ensure_elevated(caller, "delete class sessions")?;

    service.storage().delete_class_session(class_id).await?;
    info!("User {} deleted class {}", caller.user_id, class_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::models::courses::{entities::NewClassSession, requests::ClassNoteRequest};
    use crate::models::users::entities::UserRole;
    use crate::services::CourseService;
    use crate::services::test_support::{caller, date, seed_course, seed_user, storage};

    #[tokio::test]
    async fn teacher_notes_own_class_only() {
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
        let service = CourseService::new(storage);
        let note = |text: &str| ClassNoteRequest {
            class_id: class.id,
            note: Some(text.to_string()),
        };

        let noted = service
            .add_class_note(&caller(teacher_id, UserRole::User), note("Unit 3 done"))
            .await
            .unwrap();
        assert_eq!(noted.note.as_deref(), Some("Unit 3 done"));

        let err = service
            .add_class_note(&caller(other.id, UserRole::User), note("hijack"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E011");

        let cleared = service
            .add_class_note(&caller(teacher_id, UserRole::User), note("   "))
            .await
            .unwrap();
        assert_eq!(cleared.note, None);

        let err = service
            .add_class_note(
                &caller(1, UserRole::Admin),
                ClassNoteRequest {
                    class_id: 404,
                    note: None,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E006");
    }

    #[tokio::test]
    async fn deleting_class_needs_elevated_role() {
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
        let service = CourseService::new(storage);

        let err = service
            .delete_class_session(&caller(teacher_id, UserRole::User), class.id)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E011");

        let leader = caller(50, UserRole::Leader);
        service.delete_class_session(&leader, class.id).await.unwrap();
        assert!(service.list_class_sessions(course_id).await.unwrap().is_empty());

        let err = service
            .delete_class_session(&leader, class.id)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E006");
    }
}
