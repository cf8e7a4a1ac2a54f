pub mod create;
pub mod list;
pub mod note;
pub mod schedule;
pub mod sessions;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::auth::entities::AuthUser;
use crate::models::courses::{
    entities::{ClassSession, Course},
    requests::{ClassNoteRequest, CreateClassRequest, CreateCourseRequest},
};
use crate::storage::Storage;

pub struct CourseService {
    storage: Arc<dyn Storage>,
}

impl CourseService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 新建课程
    pub async fn create_course(
        &self,
        caller: &AuthUser,
        request: CreateCourseRequest,
    ) -> Result<Course> {
        create::create_course(self, caller, request).await
    }

    // 全部课程
    pub async fn list_courses(&self) -> Result<Vec<Course>> {
        list::list_courses(self).await
    }

    // 新建课时
    pub async fn create_class_session(
        &self,
        caller: &AuthUser,
        request: CreateClassRequest,
    ) -> Result<ClassSession> {
        sessions::create_class_session(self, caller, request).await
    }

    // 课程下的课时
    pub async fn list_class_sessions(&self, course_id: i64) -> Result<Vec<ClassSession>> {
        sessions::list_class_sessions(self, course_id).await
    }

    // 覆盖课程信息
    pub async fn update_course(
        &self,
        caller: &AuthUser,
        course_id: i64,
        request: CreateCourseRequest,
    ) -> Result<Course> {
        update::update_course(self, caller, course_id, request).await
    }

    pub async fn delete_course(&self, caller: &AuthUser, course_id: i64) -> Result<()> {
        update::delete_course(self, caller, course_id).await
    }

    // 课时备注
    pub async fn add_class_note(
        &self,
        caller: &AuthUser,
        request: ClassNoteRequest,
    ) -> Result<ClassSession> {
        note::add_class_note(self, caller, request).await
    }

    pub async fn delete_class_session(&self, caller: &AuthUser, class_id: i64) -> Result<()> {
        note::delete_class_session(self, caller, class_id).await
    }

    // 本人课表
    pub async fn my_schedule(
        &self,
        caller: &AuthUser,
        from: &str,
        to: &str,
    ) -> Result<Vec<ClassSession>> {
        schedule::user_schedule(self, caller, caller.user_id, from, to).await
    }

    // 指定员工课表
    pub async fn user_schedule(
        &self,
        caller: &AuthUser,
        user_id: i64,
        from: &str,
        to: &str,
    ) -> Result<Vec<ClassSession>> {
        schedule::user_schedule(self, caller, user_id, from, to).await
    }
}
