use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{PaymentService, load_payment};
use crate::models::ApiResponse;
use crate::services::tenant;

pub async fn get_payment(
    service: &PaymentService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    match load_payment(storage.as_ref(), &user, id).await {
        Ok(payment) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            payment,
            "Payment retrieved successfully",
        ))),
        Err(resp) => Ok(resp),
    }
}
