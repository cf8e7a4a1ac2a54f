use std::sync::Arc;

use chrono::NaiveDate;

use crate::models::auth::entities::AuthUser;
use crate::models::courses::entities::NewCourse;
use crate::models::users::entities::{NewUser, User, UserRole};
use crate::storage::Storage;
use crate::storage::sea_orm_storage::SeaOrmStorage;

pub async fn storage() -> Arc<dyn Storage> {
    Arc::new(SeaOrmStorage::in_memory().await)
}

pub fn caller(user_id: i64, role: UserRole) -> AuthUser {
    AuthUser {
        user_id,
        role,
        full_name: format!("caller {user_id}"),
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub async fn seed_user(storage: &Arc<dyn Storage>, username: &str, full_name: &str) -> User {
    storage
        .create_user(NewUser {
            username: username.to_string(),
            email: format!("{username}@center.test"),
            password_hash: crate::utils::password::hash_password("SecurePass123").unwrap(),
            role: UserRole::User,
            job_position: Some("Teacher".to_string()),
            full_name: full_name.to_string(),
            gender: None,
            dob: None,
            start_date: None,
        })
        .await
        .unwrap()
}

/// 返回 (teacher_id, payroll_id, course_id)
pub async fn seed_course(storage: &Arc<dyn Storage>) -> (i64, i64, i64) {
    let teacher = seed_user(storage, "teacher1", "Tran Thi B").await;
    let payroll = storage
        .create_payroll_type("IELTS".to_string(), None)
        .await
        .unwrap();
    let course = storage
        .create_course(NewCourse {
            course_name: "IELTS Foundation".to_string(),
            payroll_id: payroll.id,
            teacher_id: teacher.id,
            start_date: date(2024, 3, 1),
            end_date: date(2024, 6, 30),
            start_time: None,
            end_time: None,
            study_days: None,
            location: None,
        })
        .await
        .unwrap();
    (teacher.id, payroll.id, course.id)
}
