use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::PaymentService;
use crate::models::payments::requests::CreatePaymentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::tenant;
use crate::utils::random_code::generate_receipt_number;

/// 收据编号冲突时的最大尝试次数
const RECEIPT_ATTEMPTS: usize = 3;

pub async fn create_payment(
    service: &PaymentService,
    request: &HttpRequest,
    payment_data: CreatePaymentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if let Err(errors) = payment_data.validate() {
        return Ok(tenant::validation_failed(errors));
    }

    let school_id =
        match tenant::target_school(storage.as_ref(), &user, payment_data.school_id).await {
            Ok(id) => id,
            Err(resp) => return Ok(resp),
        };
    if let Err(resp) = tenant::check_reference(
        storage.get_student_by_id(payment_data.student_id).await,
        |student| student.school_id,
        school_id,
        "student_id",
    ) {
        return Ok(resp);
    }

    let mut attempt = 1;
    loop {
        let receipt = generate_receipt_number(chrono::Utc::now());
        match storage
            .create_payment(school_id, payment_data.clone(), receipt)
            .await
        {
            Ok(payment) => {
                info!(
                    "Payment {} of {} recorded for student {}",
                    payment.receipt_number, payment.amount, payment.student_id
                );
                return Ok(HttpResponse::Created().json(ApiResponse::success(
                    payment,
                    "Payment recorded successfully",
                )));
            }
            Err(e) if e.is_unique_violation() && attempt < RECEIPT_ATTEMPTS => {
                warn!("Receipt number collision, retrying ({})", attempt);
                attempt += 1;
            }
            Err(e) => {
                return Ok(tenant::write_error(
                    ErrorCode::CreationFailed,
                    "Receipt number already exists",
                    &e,
                ));
            }
        }
    }
}
