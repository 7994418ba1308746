use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PaymentService;
use crate::models::payments::requests::PaymentListParams;
use crate::models::{ApiResponse, ListQuery, ListResponse, apply_list_view};
use crate::services::tenant;

pub async fn list_payments(
    service: &PaymentService,
    request: &HttpRequest,
    query: PaymentListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    match storage
        .list_payments(tenant::read_scope(&user, query.school_id))
        .await
    {
        Ok(payments) => {
            let response = ListResponse::new(apply_list_view(payments, &ListQuery::from(query)));
            let message = response.message("Payments retrieved successfully");
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, message)))
        }
        Err(e) => Ok(tenant::internal_error("Failed to retrieve payment list", &e)),
    }
}
