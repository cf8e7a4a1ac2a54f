use std::sync::Arc;

use chrono::NaiveDate;

use crate::config::DatabaseConfig;
use crate::errors::Result;
use crate::models::{
    attendance::{
        entities::{Attendance, AttendanceStatus},
        requests::AttendanceEntry,
    },
    courses::entities::{ClassSession, Course, NewClassSession, NewCourse},
    payrolls::entities::PayrollType,
    salaries::{
        entities::{EmployeeRate, SalaryLine, SalaryPeriod, SalaryReportLine},
        requests::RateEntry,
    },
    students::entities::{NewStudent, Student},
    users::entities::{JobPosition, NewUser, ProfileUpdate, User},
};

pub mod sea_orm_storage;

/// 某员工在某薪资类型下当月的授课次数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaughtSessions {
    pub user_id: i64,
    pub payroll_id: i64,
    pub sessions: i64,
}

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: NewUser) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 用户总数
    async fn count_users(&self) -> Result<u64>;
    // 按岗位列出用户
    async fn list_users_by_job_position(&self, position: JobPosition) -> Result<Vec<User>>;
    // 覆盖个人资料，用户不存在返回 NotFound
    async fn update_user_profile(&self, id: i64, update: ProfileUpdate) -> Result<User>;
    // 更新密码哈希（事务内）
    async fn update_user_password(&self, id: i64, password_hash: String) -> Result<()>;

    /// 薪资类型
    async fn create_payroll_type(
        &self,
        type_name: String,
        description: Option<String>,
    ) -> Result<PayrollType>;
    async fn get_payroll_type_by_id(&self, id: i64) -> Result<Option<PayrollType>>;
    async fn get_payroll_type_by_name(&self, type_name: &str) -> Result<Option<PayrollType>>;
    async fn list_payroll_types(&self) -> Result<Vec<PayrollType>>;

    /// 薪资
    // 某月薪资报表，按 (user_id, payroll_id) 排序
    async fn list_salary_report(
        &self,
        period: SalaryPeriod,
        user_id: Option<i64>,
    ) -> Result<Vec<SalaryReportLine>>;
    // 批量写入员工单价，全部成功或全部回滚
    async fn upsert_employee_rates(
        &self,
        user_id: i64,
        rates: Vec<RateEntry>,
    ) -> Result<Vec<EmployeeRate>>;
    async fn list_employee_rates(&self, user_id: i64) -> Result<Vec<EmployeeRate>>;
    // 统计当月各员工在各薪资类型下的授课次数
    async fn count_taught_sessions(&self, period: SalaryPeriod) -> Result<Vec<TaughtSessions>>;
    // 用新结果替换该月全部薪资记录
    async fn replace_salary_lines(&self, period: SalaryPeriod, lines: Vec<SalaryLine>)
    -> Result<u64>;

    /// 课程与课时
    async fn create_course(&self, course: NewCourse) -> Result<Course>;
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    async fn list_courses(&self) -> Result<Vec<Course>>;
    async fn create_class_session(&self, session: NewClassSession) -> Result<ClassSession>;
    async fn list_class_sessions(&self, course_id: i64) -> Result<Vec<ClassSession>>;
    // 覆盖课程信息，不存在返回 NotFound
    async fn update_course(&self, id: i64, course: NewCourse) -> Result<Course>;
    // 删除课程，课时、出勤与名单关联随之删除
    async fn delete_course(&self, id: i64) -> Result<()>;
    async fn get_class_session_by_id(&self, id: i64) -> Result<Option<ClassSession>>;
    // 某老师在 [from, to] 内的课时
    async fn list_sessions_by_teacher(
        &self,
        teacher_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ClassSession>>;
    async fn update_class_note(&self, id: i64, note: Option<String>) -> Result<ClassSession>;
    // 删除课时及其出勤
    async fn delete_class_session(&self, id: i64) -> Result<()>;

    /// 学生
    // 新建学生并加入课程（同一事务内确认课程存在）
    async fn enroll_student(&self, course_id: i64, student: NewStudent) -> Result<Student>;
    // 批量导入，全部成功或全部回滚
    async fn enroll_students(&self, course_id: i64, students: Vec<NewStudent>)
    -> Result<Vec<Student>>;
    async fn list_students_by_course(&self, course_id: i64) -> Result<Vec<Student>>;
    // 覆盖学生信息，不存在返回 NotFound
    async fn update_student(&self, id: i64, student: NewStudent) -> Result<Student>;
    // 删除学生，名单关联与出勤随之删除
    async fn delete_student(&self, id: i64) -> Result<()>;

    /// 出勤
    // 记录一次课时的出勤，每条按 (class_id, student_id) upsert
    async fn record_attendance(
        &self,
        class_id: i64,
        entries: Vec<AttendanceEntry>,
    ) -> Result<Vec<Attendance>>;
    // 修改已有出勤记录，不存在返回 NotFound
    async fn update_attendance_status(
        &self,
        class_id: i64,
        student_id: i64,
        status: AttendanceStatus,
    ) -> Result<Attendance>;
}

pub async fn create_storage(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::connect(config).await?;
    Ok(Arc::new(storage))
}
