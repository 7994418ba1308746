//! 成绩实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evaluations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub school_id: i64,
    pub student_id: i64,
    pub teacher_id: Option<i64>,
    pub subject: String,
    pub evaluation_type: String,
    pub score: f64,
    pub max_score: f64,
    pub coefficient: f64,
    pub term: String,
    pub comment: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_evaluation(self) -> crate::models::evaluations::entities::Evaluation {
        use crate::models::evaluations::entities::{Evaluation, EvaluationType};

        Evaluation {
            id: self.id,
            school_id: self.school_id,
            student_id: self.student_id,
            teacher_id: self.teacher_id,
            subject: self.subject,
            evaluation_type: self.evaluation_type.parse().unwrap_or(EvaluationType::Devoir),
            score: self.score,
            max_score: self.max_score,
            coefficient: self.coefficient,
            term: self.term,
            comment: self.comment,
            created_at: super::ts(self.created_at),
            updated_at: super::ts(self.updated_at),
        }
    }
}
