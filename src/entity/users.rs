//! 用户实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub job_position: Option<String>,
    pub full_name: String,
    pub gender: Option<String>,
    pub dob: Option<Date>,
    pub start_date: Option<Date>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::courses::Entity")]
    Courses,
    #[sea_orm(has_many = "super::employee_rates::Entity")]
    EmployeeRates,
    #[sea_orm(has_many = "super::salaries::Entity")]
    Salaries,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl Related<super::employee_rates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmployeeRates.def()
    }
}

impl Related<super::salaries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Salaries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_user(self) -> crate::models::users::entities::User {
        use crate::models::users::entities::{User, UserRole};

        User {
            id: self.id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            role: UserRole::parse_or_user(&self.role),
            job_position: self.job_position,
            full_name: self.full_name,
            gender: self.gender,
            dob: self.dob,
            start_date: self.start_date,
            created_at: super::ts_to_utc(self.created_at),
            updated_at: super::ts_to_utc(self.updated_at),
        }
    }
}
