use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::{Listable, SortValue};

define_str_enum! {
    #[ts(export, export_to = "../frontend/src/types/generated/payment.ts")]
    pub enum PaymentType {
        Tuition => "TUITION",
        Registration => "REGISTRATION",
        Other => "OTHER",
    }
}

define_str_enum! {
    #[ts(export, export_to = "../frontend/src/types/generated/payment.ts")]
    pub enum PaymentMethod {
        Cash => "CASH",
        Transfer => "TRANSFER",
        MobileMoney => "MOBILE_MONEY",
    }
}

define_str_enum! {
    #[ts(export, export_to = "../frontend/src/types/generated/payment.ts")]
    pub enum PaymentStatus {
        Paid => "PAID",
        Pending => "PENDING",
        Cancelled => "CANCELLED",
    }
}

/// 缴费记录，金额以最小货币单位存储
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/payment.ts")]
pub struct Payment {
    pub id: i64,
    pub school_id: i64,
    pub student_id: i64,
    pub amount: i64,
    pub payment_type: PaymentType,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub receipt_number: String,
    pub paid_at: chrono::DateTime<chrono::Utc>,
    pub note: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Listable for Payment {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.receipt_number.as_str()];
        if let Some(note) = &self.note {
            fields.push(note.as_str());
        }
        fields
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "status" => Some(self.status.to_string()),
            "payment_type" => Some(self.payment_type.to_string()),
            "method" => Some(self.method.to_string()),
            "student_id" => Some(self.student_id.to_string()),
            _ => None,
        }
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "amount" => Some(self.amount.into()),
            "paid_at" => Some(self.paid_at.timestamp().into()),
            "receipt_number" => Some(self.receipt_number.as_str().into()),
            "created_at" => Some(self.created_at.timestamp().into()),
            _ => None,
        }
    }
}
