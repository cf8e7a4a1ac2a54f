//! 员工单价实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "employee_rates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub payroll_id: i64,
    #[sea_orm(column_type = "Double")]
    pub rate: f64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::payrolls::Entity",
        from = "Column::PayrollId",
        to = "super::payrolls::Column::Id"
    )]
    Payroll,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::payrolls::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payroll.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_employee_rate(self) -> crate::models::salaries::entities::EmployeeRate {
        crate::models::salaries::entities::EmployeeRate {
            user_id: self.user_id,
            payroll_id: self.payroll_id,
            rate: self.rate,
            updated_at: super::ts_to_utc(self.updated_at),
        }
    }
}
