//! 课表条目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "schedule_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub school_id: i64,
    pub room_id: i64,
    pub teacher_id: i64,
    pub subject: String,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub academic_year: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rooms::Entity",
        from = "Column::RoomId",
        to = "super::rooms::Column::Id"
    )]
    Room,
    #[sea_orm(
        belongs_to = "super::teachers::Entity",
        from = "Column::TeacherId",
        to = "super::teachers::Column::Id"
    )]
    Teacher,
}

impl Related<super::rooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_schedule_entry(self) -> crate::models::schedules::entities::ScheduleEntry {
        use crate::models::schedules::entities::{ScheduleDay, ScheduleEntry};

        ScheduleEntry {
            id: self.id,
            school_id: self.school_id,
            room_id: self.room_id,
            teacher_id: self.teacher_id,
            subject: self.subject,
            day: self.day.parse().unwrap_or(ScheduleDay::Monday),
            start_time: self.start_time,
            end_time: self.end_time,
            academic_year: self.academic_year,
            created_at: super::ts(self.created_at),
            updated_at: super::ts(self.updated_at),
        }
    }
}
