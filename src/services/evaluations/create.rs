use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{EvaluationService, check_teacher};
use crate::models::evaluations::requests::CreateEvaluationRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::tenant;

pub async fn create_evaluation(
    service: &EvaluationService,
    request: &HttpRequest,
    evaluation_data: CreateEvaluationRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if let Err(errors) = evaluation_data.validate() {
        return Ok(tenant::validation_failed(errors));
    }

    let school_id =
        match tenant::target_school(storage.as_ref(), &user, evaluation_data.school_id).await {
            Ok(id) => id,
            Err(resp) => return Ok(resp),
        };
    if let Err(resp) = tenant::check_reference(
        storage.get_student_by_id(evaluation_data.student_id).await,
        |student| student.school_id,
        school_id,
        "student_id",
    ) {
        return Ok(resp);
    }
    if let Err(resp) = check_teacher(storage.as_ref(), evaluation_data.teacher_id, school_id).await
    {
        return Ok(resp);
    }

    match storage.create_evaluation(school_id, evaluation_data).await {
        Ok(evaluation) => {
            info!(
                "Evaluation {} ({}) recorded for student {}",
                evaluation.subject, evaluation.evaluation_type, evaluation.student_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                evaluation,
                "Evaluation recorded successfully",
            )))
        }
        Err(e) => Ok(tenant::write_error(
            ErrorCode::CreationFailed,
            "Evaluation conflicts with an existing record",
            &e,
        )),
    }
}
