use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{PaymentService, load_payment};
use crate::models::ApiResponse;
use crate::services::tenant;

pub async fn delete_payment(
    service: &PaymentService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let payment = match load_payment(storage.as_ref(), &user, id).await {
        Ok(payment) => payment,
        Err(resp) => return Ok(resp),
    };

    match storage.delete_payment(id).await {
        Ok(true) => {
            info!("Payment {} deleted by user {}", payment.receipt_number, user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Payment deleted successfully")))
        }
        Ok(false) => Ok(tenant::not_found("Payment")),
        Err(e) => Ok(tenant::internal_error("Failed to delete payment", &e)),
    }
}
