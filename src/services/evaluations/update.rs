use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{EvaluationService, check_teacher, load_evaluation};
use crate::models::evaluations::requests::{UpdateEvaluationRequest, score_rule};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::tenant;
use crate::utils::validate::FieldError;

pub async fn update_evaluation(
    service: &EvaluationService,
    request: &HttpRequest,
    id: i64,
    update_data: UpdateEvaluationRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let existing = match load_evaluation(storage.as_ref(), &user, id).await {
        Ok(evaluation) => evaluation,
        Err(resp) => return Ok(resp),
    };

    let mut errors = update_data.validate().err().unwrap_or_default();
    // 分数与满分合并现有值后再校验
    let score = update_data.score.unwrap_or(existing.score);
    let max_score = update_data.max_score.unwrap_or(existing.max_score);
    if let Err(message) = score_rule(score, max_score) {
        errors.push(FieldError::new("score", message));
    }
    if !errors.is_empty() {
        return Ok(tenant::validation_failed(errors));
    }

    if let Err(resp) = check_teacher(storage.as_ref(), update_data.teacher_id, existing.school_id).await
    {
        return Ok(resp);
    }

    match storage.update_evaluation(id, update_data).await {
        Ok(Some(evaluation)) => {
            info!("Evaluation {} updated by user {}", id, user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                evaluation,
                "Evaluation updated successfully",
            )))
        }
        Ok(None) => Ok(tenant::not_found("Evaluation")),
        Err(e) => Ok(tenant::write_error(
            ErrorCode::UpdateFailed,
            "Evaluation conflicts with an existing record",
            &e,
        )),
    }
}
