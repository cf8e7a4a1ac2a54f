//! 课时实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub teacher_id: i64,
    pub class_date: Date,
    pub start_time: Option<Time>,
    pub end_time: Option<Time>,
    pub room: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub note: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(has_many = "super::attendances::Entity")]
    Attendances,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::attendances::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendances.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_class_session(self) -> crate::models::courses::entities::ClassSession {
        crate::models::courses::entities::ClassSession {
            id: self.id,
            course_id: self.course_id,
            teacher_id: self.teacher_id,
            class_date: self.class_date,
            start_time: self.start_time,
            end_time: self.end_time,
            room: self.room,
            note: self.note,
        }
    }
}
