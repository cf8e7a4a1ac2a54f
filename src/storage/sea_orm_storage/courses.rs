use super::SeaOrmStorage;
use crate::entity::prelude::{Classes, Courses};
use crate::entity::{classes, courses};
use crate::errors::{HWSystemError, Result};
use crate::models::courses::entities::{ClassSession, Course, NewClassSession, NewCourse};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, course: NewCourse) -> Result<Course> {
        let model = courses::ActiveModel {
            course_name: Set(course.course_name),
            payroll_id: Set(course.payroll_id),
            teacher_id: Set(course.teacher_id),
            start_date: Set(course.start_date),
            end_date: Set(course.end_date),
            start_time: Set(course.start_time),
            end_time: Set(course.end_time),
            study_days: Set(course.study_days),
            location: Set(course.location),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| HWSystemError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| HWSystemError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    pub async fn list_courses_impl(&self) -> Result<Vec<Course>> {
        let result = Courses::find()
            .order_by_asc(courses::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| HWSystemError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_course()).collect())
    }

    /// 创建课时
    pub async fn create_class_session_impl(&self, session: NewClassSession) -> Result<ClassSession> {
        let model = classes::ActiveModel {
            course_id: Set(session.course_id),
            teacher_id: Set(session.teacher_id),
            class_date: Set(session.class_date),
            start_time: Set(session.start_time),
            end_time: Set(session.end_time),
            room: Set(session.room),
            note: Set(session.note),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| HWSystemError::database_operation(format!("创建课时失败: {e}")))?;

        Ok(result.into_class_session())
    }

    /// 课程下的全部课时，按日期排序
    pub async fn list_class_sessions_impl(&self, course_id: i64) -> Result<Vec<ClassSession>> {
        let result = Classes::find()
            .filter(classes::Column::CourseId.eq(course_id))
            .order_by_asc(classes::Column::ClassDate)
            .order_by_asc(classes::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| HWSystemError::database_operation(format!("查询课时失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_class_session()).collect())
    }

    /// 覆盖课程信息（创建时间保持不变）
    pub async fn update_course_impl(&self, id: i64, course: NewCourse) -> Result<Course> {
        self.transaction(move |txn| {
            Box::pin(async move {
                let existing = Courses::find_by_id(id)
                    .one(txn)
                    .await?
                    .ok_or_else(|| HWSystemError::not_found(format!("Course {id} not found")))?;

                let mut active: courses::ActiveModel = existing.into();
                active.course_name = Set(course.course_name);
                active.payroll_id = Set(course.payroll_id);
                active.teacher_id = Set(course.teacher_id);
                active.start_date = Set(course.start_date);
                active.end_date = Set(course.end_date);
                active.start_time = Set(course.start_time);
                active.end_time = Set(course.end_time);
                active.study_days = Set(course.study_days);
                active.location = Set(course.location);

                Ok(active.update(txn).await?.into_course())
            })
        })
        .await
    }

    /// 删除课程，外键级联删除课时、出勤与名单关联
    pub async fn delete_course_impl(&self, id: i64) -> Result<()> {
        let result = Courses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| HWSystemError::database_operation(format!("删除课程失败: {e}")))?;

        if result.rows_affected == 0 {
            return Err(HWSystemError::not_found(format!("Course {id} not found")));
        }
        Ok(())
    }

    pub async fn get_class_session_by_id_impl(&self, id: i64) -> Result<Option<ClassSession>> {
        let result = Classes::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| HWSystemError::database_operation(format!("查询课时失败: {e}")))?;

        Ok(result.map(|m| m.into_class_session()))
    }

    /// 老师在闭区间 [from, to] 内的课时，按日期、开始时间排序
    pub async fn list_sessions_by_teacher_impl(
        &self,
        teacher_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ClassSession>> {
        let result = Classes::find()
            .filter(classes::Column::TeacherId.eq(teacher_id))
            .filter(classes::Column::ClassDate.gte(from))
            .filter(classes::Column::ClassDate.lte(to))
            .order_by_asc(classes::Column::ClassDate)
            .order_by_asc(classes::Column::StartTime)
            .order_by_asc(classes::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| HWSystemError::database_operation(format!("查询课表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_class_session()).collect())
    }

    pub async fn update_class_note_impl(
        &self,
        id: i64,
        note: Option<String>,
    ) -> Result<ClassSession> {
        self.transaction(move |txn| {
            Box::pin(async move {
                let existing = Classes::find_by_id(id)
                    .one(txn)
                    .await?
                    .ok_or_else(|| HWSystemError::not_found(format!("Class {id} not found")))?;

                let mut active: classes::ActiveModel = existing.into();
                active.note = Set(note);
                Ok(active.update(txn).await?.into_class_session())
            })
        })
        .await
    }

    /// 删除课时，外键级联删除出勤
    pub async fn delete_class_session_impl(&self, id: i64) -> Result<()> {
        let result = Classes::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| HWSystemError::database_operation(format!("删除课时失败: {e}")))?;

        if result.rows_affected == 0 {
            return Err(HWSystemError::not_found(format!("Class {id} not found")));
        }
        Ok(())
    }
}
