use serde::Deserialize;
use ts_rs::TS;

use super::entities::{PaymentMethod, PaymentStatus, PaymentType};
use crate::models::{ListQuery, SortOrder};
use crate::utils::validate::{FieldError, Validator};

fn amount_rule(amount: i64) -> Result<(), &'static str> {
    if amount <= 0 {
        return Err("Amount must be greater than 0");
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/payment.ts")]
pub struct CreatePaymentRequest {
    pub student_id: i64,
    pub amount: i64,
    pub payment_type: PaymentType,
    pub method: PaymentMethod,
    /// 默认 PAID
    pub status: Option<PaymentStatus>,
    /// 默认当前时间
    pub paid_at: Option<chrono::DateTime<chrono::Utc>>,
    pub note: Option<String>,
    pub school_id: Option<i64>,
}

impl CreatePaymentRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        Validator::new()
            .rule("amount", amount_rule(self.amount))
            .finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/payment.ts")]
pub struct UpdatePaymentRequest {
    pub amount: Option<i64>,
    pub payment_type: Option<PaymentType>,
    pub method: Option<PaymentMethod>,
    pub status: Option<PaymentStatus>,
    pub paid_at: Option<chrono::DateTime<chrono::Utc>>,
    pub note: Option<String>,
}

impl UpdatePaymentRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        if let Some(amount) = self.amount {
            v.rule("amount", amount_rule(amount));
        }
        v.finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/payment.ts")]
pub struct PaymentListParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub payment_type: Option<String>,
    pub method: Option<String>,
    pub student_id: Option<i64>,
    pub school_id: Option<i64>,
    pub sort: Option<String>,
    pub order: Option<SortOrder>,
}

impl From<PaymentListParams> for ListQuery {
    fn from(p: PaymentListParams) -> Self {
        ListQuery::new()
            .search(p.search)
            .filter("status", p.status)
            .filter("payment_type", p.payment_type)
            .filter("method", p.method)
            .filter("student_id", p.student_id.map(|id| id.to_string()))
            .sort_by(p.sort, p.order)
    }
}
