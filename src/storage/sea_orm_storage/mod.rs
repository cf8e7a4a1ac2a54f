//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。
//! 多语句写入统一走 [`SeaOrmStorage::transaction`]：闭包返回 `Ok` 提交，
//! 返回 `Err` 或中途 panic（事务对象被 drop）均回滚。

mod attendance;
mod courses;
mod payrolls;
mod salaries;
mod students;
mod users;


use crate::config::DatabaseConfig;
use crate::errors::{HWSystemError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, DatabaseTransaction, DbErr, SqlErr,
    TransactionError, TransactionTrait,
};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use tracing::info;

/// 写入错误映射：唯一约束冲突转为 Conflict，其余转为 DatabaseOperation
pub(crate) fn map_write_err(err: DbErr, context: &str, conflict: &str) -> HWSystemError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => HWSystemError::conflict(conflict),
        _ => HWSystemError::database_operation(format!("{context}: {err}")),
    }
}

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 连接数据库并运行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| HWSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| HWSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size.max(1))
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(None)
            .connect_with(opt)
            .await
            .map_err(|e| HWSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| HWSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(HWSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite:, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    /// 在单个事务中执行 `work`
    ///
    /// `work` 内只能使用传入的事务句柄。`work` 返回的业务错误原样返回，
    /// 开启/提交失败转为 DatabaseOperation。
    pub(crate) async fn transaction<F, T>(&self, work: F) -> Result<T>
    where
        F: for<'c> FnOnce(
                &'c DatabaseTransaction,
            ) -> Pin<Box<dyn Future<Output = Result<T>> + Send + 'c>>
            + Send,
        T: Send,
    {
        self.db
            .transaction::<F, T, HWSystemError>(work)
            .await
            .map_err(|e| match e {
                TransactionError::Connection(e) => {
                    HWSystemError::database_operation(format!("事务执行失败: {e}"))
                }
                TransactionError::Transaction(e) => e,
            })
    }
}

#[cfg(test)]
impl SeaOrmStorage {
    /// 测试用内存数据库（单连接，迁移已执行）
    pub(crate) async fn in_memory() -> Self {
        Self::connect(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            pool_size: 1,
            timeout: 5,
        })
        .await
        .expect("in-memory sqlite should open")
    }
}

// Storage trait 实现
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
use crate::storage::{Storage, TaughtSessions};
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: NewUser) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn list_users_by_job_position(&self, position: JobPosition) -> Result<Vec<User>> {
        self.list_users_by_job_position_impl(position).await
    }

    async fn update_user_profile(&self, id: i64, update: ProfileUpdate) -> Result<User> {
        self.update_user_profile_impl(id, update).await
    }

    async fn update_user_password(&self, id: i64, password_hash: String) -> Result<()> {
        self.update_user_password_impl(id, password_hash).await
    }

    // 薪资类型模块
    async fn create_payroll_type(
        &self,
        type_name: String,
        description: Option<String>,
    ) -> Result<PayrollType> {
        self.create_payroll_type_impl(type_name, description).await
    }

    async fn get_payroll_type_by_id(&self, id: i64) -> Result<Option<PayrollType>> {
        self.get_payroll_type_by_id_impl(id).await
    }

    async fn get_payroll_type_by_name(&self, type_name: &str) -> Result<Option<PayrollType>> {
        self.get_payroll_type_by_name_impl(type_name).await
    }

    async fn list_payroll_types(&self) -> Result<Vec<PayrollType>> {
        self.list_payroll_types_impl().await
    }

    // 薪资模块
    async fn list_salary_report(
        &self,
        period: SalaryPeriod,
        user_id: Option<i64>,
    ) -> Result<Vec<SalaryReportLine>> {
        self.list_salary_report_impl(period, user_id).await
    }

    async fn upsert_employee_rates(
        &self,
        user_id: i64,
        rates: Vec<RateEntry>,
    ) -> Result<Vec<EmployeeRate>> {
        self.upsert_employee_rates_impl(user_id, rates).await
    }

    async fn list_employee_rates(&self, user_id: i64) -> Result<Vec<EmployeeRate>> {
        self.list_employee_rates_impl(user_id).await
    }

    async fn count_taught_sessions(&self, period: SalaryPeriod) -> Result<Vec<TaughtSessions>> {
        self.count_taught_sessions_impl(period).await
    }

    async fn replace_salary_lines(
        &self,
        period: SalaryPeriod,
        lines: Vec<SalaryLine>,
    ) -> Result<u64> {
        self.replace_salary_lines_impl(period, lines).await
    }

    // 课程模块
    async fn create_course(&self, course: NewCourse) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        self.list_courses_impl().await
    }

    async fn create_class_session(&self, session: NewClassSession) -> Result<ClassSession> {
        self.create_class_session_impl(session).await
    }

    async fn list_class_sessions(&self, course_id: i64) -> Result<Vec<ClassSession>> {
        self.list_class_sessions_impl(course_id).await
    }

    async fn update_course(&self, id: i64, course: NewCourse) -> Result<Course> {
        self.update_course_impl(id, course).await
    }

    async fn delete_course(&self, id: i64) -> Result<()> {
        self.delete_course_impl(id).await
    }

    async fn get_class_session_by_id(&self, id: i64) -> Result<Option<ClassSession>> {
        self.get_class_session_by_id_impl(id).await
    }

    async fn list_sessions_by_teacher(
        &self,
        teacher_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ClassSession>> {
        self.list_sessions_by_teacher_impl(teacher_id, from, to)
            .await
    }

    async fn update_class_note(&self, id: i64, note: Option<String>) -> Result<ClassSession> {
        self.update_class_note_impl(id, note).await
    }

    async fn delete_class_session(&self, id: i64) -> Result<()> {
        self.delete_class_session_impl(id).await
    }

    // 学生模块
    async fn enroll_student(&self, course_id: i64, student: NewStudent) -> Result<Student> {
        self.enroll_student_impl(course_id, student).await
    }

    async fn enroll_students(
        &self,
        course_id: i64,
        students: Vec<NewStudent>,
    ) -> Result<Vec<Student>> {
        self.enroll_students_impl(course_id, students).await
    }

    async fn list_students_by_course(&self, course_id: i64) -> Result<Vec<Student>> {
        self.list_students_by_course_impl(course_id).await
    }

    async fn update_student(&self, id: i64, student: NewStudent) -> Result<Student> {
        self.update_student_impl(id, student).await
    }

    async fn delete_student(&self, id: i64) -> Result<()> {
        self.delete_student_impl(id).await
    }

    // 出勤模块
    async fn record_attendance(
        &self,
        class_id: i64,
        entries: Vec<AttendanceEntry>,
    ) -> Result<Vec<Attendance>> {
        self.record_attendance_impl(class_id, entries).await
    }

    async fn update_attendance_status(
        &self,
        class_id: i64,
        student_id: i64,
        status: AttendanceStatus,
    ) -> Result<Attendance> {
        self.update_attendance_status_impl(class_id, student_id, status)
            .await
    }
}
