use super::SeaOrmStorage;
use crate::entity::prelude::{CourseStudents, Courses, Students};
use crate::entity::{course_students, students};
use crate::errors::{HWSystemError, Result};
use crate::models::students::entities::{NewStudent, Student};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

/// 在给定连接（通常是事务）上确认课程存在
async fn ensure_course_exists<C: ConnectionTrait>(conn: &C, course_id: i64) -> Result<()> {
    match Courses::find_by_id(course_id).one(conn).await? {
        Some(_) => Ok(()),
        None => Err(HWSystemError::not_found(format!(
            "Course {course_id} not found"
        ))),
    }
}

/// 插入学生并写入课程关联，返回新学生
async fn insert_and_link<C: ConnectionTrait>(
    conn: &C,
    course_id: i64,
    student: NewStudent,
    now: i64,
) -> Result<Student> {
    let inserted = students::ActiveModel {
        student_name: Set(student.student_name),
        dob: Set(student.dob),
        email: Set(student.email),
        phone_number: Set(student.phone_number),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    course_students::ActiveModel {
        course_id: Set(course_id),
        student_id: Set(inserted.id),
        joined_at: Set(now),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    Ok(inserted.into_student())
}

impl SeaOrmStorage {
    /// 新建学生并加入课程
    pub async fn enroll_student_impl(&self, course_id: i64, student: NewStudent) -> Result<Student> {
        self.transaction(move |txn| {
            Box::pin(async move {
                ensure_course_exists(txn, course_id).await?;
                insert_and_link(txn, course_id, student, chrono::Utc::now().timestamp()).await
            })
        })
        .await
    }

    /// 批量导入学生
    pub async fn enroll_students_impl(
        &self,
        course_id: i64,
        students: Vec<NewStudent>,
    ) -> Result<Vec<Student>> {
        self.transaction(move |txn| {
            Box::pin(async move {
                ensure_course_exists(txn, course_id).await?;

                let now = chrono::Utc::now().timestamp();
                let mut created = Vec::with_capacity(students.len());
                for student in students {
                    created.push(insert_and_link(txn, course_id, student, now).await?);
                }
                Ok(created)
            })
        })
        .await
    }

    /// 课程名单，按学生 ID 排序
    pub async fn list_students_by_course_impl(&self, course_id: i64) -> Result<Vec<Student>> {
        let rows = CourseStudents::find()
            .filter(course_students::Column::CourseId.eq(course_id))
            .order_by_asc(course_students::Column::StudentId)
            .find_also_related(Students)
            .all(&self.db)
            .await
            .map_err(|e| HWSystemError::database_operation(format!("查询学生名单失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, student)| student.map(|s| s.into_student()))
            .collect())
    }

    /// 覆盖学生信息
    pub async fn update_student_impl(&self, id: i64, student: NewStudent) -> Result<Student> {
        self.transaction(move |txn| {
            Box::pin(async move {
                let existing = Students::find_by_id(id)
                    .one(txn)
                    .await?
                    .ok_or_else(|| HWSystemError::not_found(format!("Student {id} not found")))?;

                let mut active: students::ActiveModel = existing.into();
                active.student_name = Set(student.student_name);
                active.dob = Set(student.dob);
                active.email = Set(student.email);
                active.phone_number = Set(student.phone_number);
                Ok(active.update(txn).await?.into_student())
            })
        })
        .await
    }

    /// 删除学生，外键级联删除名单关联与出勤
    pub async fn delete_student_impl(&self, id: i64) -> Result<()> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| HWSystemError::database_operation(format!("删除学生失败: {e}")))?;

        if result.rows_affected == 0 {
            return Err(HWSystemError::not_found(format!("Student {id} not found")));
        }
        Ok(())
    }
}
