use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{PaymentService, load_payment};
use crate::models::payments::requests::UpdatePaymentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::tenant;

pub async fn update_payment(
    service: &PaymentService,
    request: &HttpRequest,
    id: i64,
    update_data: UpdatePaymentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = load_payment(storage.as_ref(), &user, id).await {
        return Ok(resp);
    }
    if let Err(errors) = update_data.validate() {
        return Ok(tenant::validation_failed(errors));
    }

    // 收据编号不可修改
    match storage.update_payment(id, update_data).await {
        Ok(Some(payment)) => {
            info!("Payment {} updated by user {}", payment.receipt_number, user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                payment,
                "Payment updated successfully",
            )))
        }
        Ok(None) => Ok(tenant::not_found("Payment")),
        Err(e) => Ok(tenant::write_error(
            ErrorCode::UpdateFailed,
            "Payment conflicts with an existing record",
            &e,
        )),
    }
}
