//! 薪资类型实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payrolls")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub type_name: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::courses::Entity")]
    Courses,
    #[sea_orm(has_many = "super::salaries::Entity")]
    Salaries,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl Related<super::salaries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Salaries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_payroll_type(self) -> crate::models::payrolls::entities::PayrollType {
        crate::models::payrolls::entities::PayrollType {
            id: self.id,
            type_name: self.type_name,
            description: self.description,
        }
    }
}
