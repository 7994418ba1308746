//! 教师实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub school_id: i64,
    pub user_id: Option<i64>,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
    pub teacher_type: String,
    pub grade: String,
    pub specialite: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::schools::Entity",
        from = "Column::SchoolId",
        to = "super::schools::Column::Id"
    )]
    School,
    #[sea_orm(has_many = "super::schedule_entries::Entity")]
    ScheduleEntries,
}

impl Related<super::schools::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::School.def()
    }
}

impl Related<super::schedule_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScheduleEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_teacher(self) -> crate::models::teachers::entities::Teacher {
        use crate::models::teachers::entities::{Teacher, TeacherGrade, TeacherType};

        Teacher {
            id: self.id,
            school_id: self.school_id,
            user_id: self.user_id,
            nom: self.nom,
            prenom: self.prenom,
            email: self.email,
            telephone: self.telephone,
            teacher_type: self.teacher_type.parse().unwrap_or(TeacherType::Permanent),
            grade: self.grade.parse().unwrap_or(TeacherGrade::Assistant),
            specialite: self.specialite,
            created_at: super::ts(self.created_at),
            updated_at: super::ts(self.updated_at),
        }
    }
}
