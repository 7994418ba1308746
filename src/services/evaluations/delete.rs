use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{EvaluationService, load_evaluation};
use crate::models::ApiResponse;
use crate::services::tenant;

pub async fn delete_evaluation(
    service: &EvaluationService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = load_evaluation(storage.as_ref(), &user, id).await {
        return Ok(resp);
    }

    match storage.delete_evaluation(id).await {
        Ok(true) => {
            info!("Evaluation {} deleted by user {}", id, user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Evaluation deleted successfully",
            )))
        }
        Ok(false) => Ok(tenant::not_found("Evaluation")),
        Err(e) => Ok(tenant::internal_error("Failed to delete evaluation", &e)),
    }
}
