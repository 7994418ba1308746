pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::tenant;
use crate::models::evaluations::{
    entities::Evaluation,
    requests::{CreateEvaluationRequest, EvaluationListParams, UpdateEvaluationRequest},
};
use crate::models::users::entities::User;
use crate::storage::Storage;

pub struct EvaluationService {
    storage: Option<Arc<dyn Storage>>,
}

impl EvaluationService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_evaluations(
        &self,
        request: &HttpRequest,
        query: EvaluationListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_evaluations(self, request, query).await
    }

    pub async fn create_evaluation(
        &self,
        request: &HttpRequest,
        evaluation_data: CreateEvaluationRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_evaluation(self, request, evaluation_data).await
    }

    pub async fn get_evaluation(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_evaluation(self, request, id).await
    }

    pub async fn update_evaluation(
        &self,
        request: &HttpRequest,
        id: i64,
        update_data: UpdateEvaluationRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_evaluation(self, request, id, update_data).await
    }

    pub async fn delete_evaluation(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_evaluation(self, request, id).await
    }
}

pub(crate) async fn load_evaluation(
    storage: &dyn Storage,
    user: &User,
    id: i64,
) -> Result<Evaluation, HttpResponse> {
    match storage.get_evaluation_by_id(id).await {
        Ok(Some(evaluation)) => {
            tenant::ensure_visible(user, evaluation.school_id, "Evaluation")?;
            Ok(evaluation)
        }
        Ok(None) => Err(tenant::not_found("Evaluation")),
        Err(e) => Err(tenant::internal_error("Failed to retrieve evaluation", &e)),
    }
}

/// 评分教师可为空；给出时必须属于同一学校
pub(crate) async fn check_teacher(
    storage: &dyn Storage,
    teacher_id: Option<i64>,
    school_id: i64,
) -> Result<(), HttpResponse> {
    match teacher_id {
        Some(teacher_id) => tenant::check_reference(
            storage.get_teacher_by_id(teacher_id).await,
            |teacher| teacher.school_id,
            school_id,
            "teacher_id",
        ),
        None => Ok(()),
    }
}
