use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{EvaluationService, load_evaluation};
use crate::models::ApiResponse;
use crate::services::tenant;

pub async fn get_evaluation(
    service: &EvaluationService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    match load_evaluation(storage.as_ref(), &user, id).await {
        Ok(evaluation) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            evaluation,
            "Evaluation retrieved successfully",
        ))),
        Err(resp) => Ok(resp),
    }
}
