use super::{SeaOrmStorage, db_error};
use crate::entity::evaluations::{ActiveModel, Column, Entity as Evaluations};
use crate::errors::Result;
use crate::models::evaluations::{
    entities::Evaluation,
    requests::{CreateEvaluationRequest, UpdateEvaluationRequest},
};
use crate::storage::SchoolFilter;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_evaluation_impl(
        &self,
        school_id: i64,
        req: CreateEvaluationRequest,
    ) -> Result<Evaluation> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            school_id: Set(school_id),
            student_id: Set(req.student_id),
            teacher_id: Set(req.teacher_id),
            subject: Set(req.subject.trim().to_string()),
            evaluation_type: Set(req.evaluation_type.to_string()),
            score: Set(req.score),
            max_score: Set(req.max_score),
            coefficient: Set(req.coefficient),
            term: Set(req.term.trim().to_string()),
            comment: Set(req.comment),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建成绩失败"))?;

        Ok(result.into_evaluation())
    }

    pub async fn get_evaluation_by_id_impl(&self, id: i64) -> Result<Option<Evaluation>> {
        let result = Evaluations::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询成绩失败"))?;

        Ok(result.map(|m| m.into_evaluation()))
    }

    pub async fn list_evaluations_impl(&self, school: SchoolFilter) -> Result<Vec<Evaluation>> {
        let mut select = Evaluations::find();
        if let Some(school_id) = school {
            select = select.filter(Column::SchoolId.eq(school_id));
        }

        let evaluations = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询成绩列表失败"))?;

        Ok(evaluations.into_iter().map(|m| m.into_evaluation()).collect())
    }

    pub async fn update_evaluation_impl(
        &self,
        id: i64,
        update: UpdateEvaluationRequest,
    ) -> Result<Option<Evaluation>> {
        if self.get_evaluation_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(Some(teacher_id));
        }
        if let Some(subject) = update.subject {
            model.subject = Set(subject.trim().to_string());
        }
        if let Some(evaluation_type) = update.evaluation_type {
            model.evaluation_type = Set(evaluation_type.to_string());
        }
        if let Some(score) = update.score {
            model.score = Set(score);
        }
        if let Some(max_score) = update.max_score {
            model.max_score = Set(max_score);
        }
        if let Some(coefficient) = update.coefficient {
            model.coefficient = Set(coefficient);
        }
        if let Some(term) = update.term {
            model.term = Set(term.trim().to_string());
        }
        if let Some(comment) = update.comment {
            model.comment = Set(Some(comment));
        }

        model
            .update(&self.db)
            .await
            .map_err(db_error("更新成绩失败"))?;

        self.get_evaluation_by_id_impl(id).await
    }

    pub async fn delete_evaluation_impl(&self, id: i64) -> Result<bool> {
        let result = Evaluations::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除成绩失败"))?;

        Ok(result.rows_affected > 0)
    }
}
