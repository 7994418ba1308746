//! 缴费记录导出

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::PaymentService;
use crate::models::payments::{entities::Payment, requests::PaymentListParams};
use crate::models::{ApiResponse, ErrorCode, ListQuery, apply_list_view};
use crate::services::tenant;
use crate::utils::csv_export::{CsvRecord, attachment_response, to_csv_bytes};

impl CsvRecord for Payment {
    fn headers() -> &'static [&'static str] {
        &[
            "receipt_number",
            "student_id",
            "amount",
            "payment_type",
            "method",
            "status",
            "paid_at",
            "note",
        ]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.receipt_number.clone(),
            self.student_id.to_string(),
            self.amount.to_string(),
            self.payment_type.to_string(),
            self.method.to_string(),
            self.status.to_string(),
            self.paid_at.format("%Y-%m-%d %H:%M").to_string(),
            self.note.clone().unwrap_or_default(),
        ]
    }
}

pub async fn export_payments(
    service: &PaymentService,
    request: &HttpRequest,
    query: PaymentListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let payments = match storage
        .list_payments(tenant::read_scope(&user, query.school_id))
        .await
    {
        Ok(payments) => apply_list_view(payments, &ListQuery::from(query)),
        Err(e) => return Ok(tenant::internal_error("Failed to retrieve payment list", &e)),
    };

    match to_csv_bytes(&payments) {
        Ok(body) => {
            info!("User {} exported {} payments", user.id, payments.len());
            let file_name = format!("paiements_{}.csv", chrono::Utc::now().format("%Y%m%d"));
            Ok(attachment_response(&file_name, body))
        }
        Err(e) => Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::ExportFailed,
            format!("Export failed: {e}"),
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::payments::entities::{PaymentMethod, PaymentStatus, PaymentType};
    use crate::utils::csv_export::UTF8_BOM;

    #[test]
    fn test_payment_row() {
        let paid_at = chrono::DateTime::parse_from_rfc3339("2025-03-01T09:30:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        let payment = Payment {
            id: 1,
            school_id: 1,
            student_id: 42,
            amount: 150000,
            payment_type: PaymentType::Tuition,
            method: PaymentMethod::MobileMoney,
            status: PaymentStatus::Paid,
            receipt_number: "REC-20250301-ABC234".into(),
            paid_at,
            note: None,
            created_at: paid_at,
            updated_at: paid_at,
        };
        let bytes = to_csv_bytes(&[payment]).unwrap();
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines[0],
            "receipt_number;student_id;amount;payment_type;method;status;paid_at;note"
        );
        assert_eq!(
            lines[1],
            "REC-20250301-ABC234;42;150000;TUITION;MOBILE_MONEY;PAID;2025-03-01 09:30;"
        );
    }
}
