use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EvaluationService;
use crate::models::evaluations::requests::EvaluationListParams;
use crate::models::{ApiResponse, ListQuery, ListResponse, apply_list_view};
use crate::services::tenant;

pub async fn list_evaluations(
    service: &EvaluationService,
    request: &HttpRequest,
    query: EvaluationListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    match storage
        .list_evaluations(tenant::read_scope(&user, query.school_id))
        .await
    {
        Ok(evaluations) => {
            let response =
                ListResponse::new(apply_list_view(evaluations, &ListQuery::from(query)));
            let message = response.message("Evaluations retrieved successfully");
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, message)))
        }
        Err(e) => Ok(tenant::internal_error("Failed to retrieve evaluation list", &e)),
    }
}
