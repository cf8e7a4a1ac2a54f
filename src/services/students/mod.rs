pub mod import;
pub mod insert;
pub mod list;
pub mod update;

use std::sync::Arc;

use actix_multipart::Multipart;

use crate::config::UploadConfig;
use crate::errors::Result;
use crate::models::auth::entities::AuthUser;
use crate::models::students::{
    entities::Student, requests::AddStudentRequest, responses::ImportStudentsResponse,
};
use crate::storage::Storage;

pub struct StudentService {
    storage: Arc<dyn Storage>,
    upload: UploadConfig,
}

impl StudentService {
    pub fn new(storage: Arc<dyn Storage>, upload: UploadConfig) -> Self {
        Self { storage, upload }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub(crate) fn upload(&self) -> &UploadConfig {
        &self.upload
    }

    // 从 csv / xlsx 批量导入学生并加入课程
    pub async fn import_students(
        &self,
        payload: Multipart,
        course_id: i64,
    ) -> Result<ImportStudentsResponse> {
        import::import_students(self, payload, course_id).await
    }

    // 录入单个学生并加入课程
    pub async fn insert_one_student(
        &self,
        request: AddStudentRequest,
        course_id: i64,
    ) -> Result<Student> {
        insert::insert_one_student(self, request, course_id).await
    }

    // 课程花名册
    pub async fn students_by_course(&self, course_id: i64) -> Result<Vec<Student>> {
        list::students_by_course(self, course_id).await
    }

    // 修改学生信息
    pub async fn update_student(
        &self,
        caller: &AuthUser,
        student_id: i64,
        request: AddStudentRequest,
    ) -> Result<Student> {
        update::update_student(self, caller, student_id, request).await
    }

    pub async fn delete_student(&self, caller: &AuthUser, student_id: i64) -> Result<()> {
        update::delete_student(self, caller, student_id).await
    }
}
