pub mod create;
pub mod delete;
pub mod export;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::tenant;
use crate::models::payments::{
    entities::Payment,
    requests::{CreatePaymentRequest, PaymentListParams, UpdatePaymentRequest},
};
use crate::models::users::entities::User;
use crate::storage::Storage;

pub struct PaymentService {
    storage: Option<Arc<dyn Storage>>,
}

impl PaymentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_payments(
        &self,
        request: &HttpRequest,
        query: PaymentListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_payments(self, request, query).await
    }

    pub async fn create_payment(
        &self,
        request: &HttpRequest,
        payment_data: CreatePaymentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_payment(self, request, payment_data).await
    }

    pub async fn get_payment(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        get::get_payment(self, request, id).await
    }

    pub async fn update_payment(
        &self,
        request: &HttpRequest,
        id: i64,
        update_data: UpdatePaymentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_payment(self, request, id, update_data).await
    }

    pub async fn delete_payment(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        delete::delete_payment(self, request, id).await
    }

    // 导出缴费记录 CSV
    pub async fn export_payments(
        &self,
        request: &HttpRequest,
        query: PaymentListParams,
    ) -> ActixResult<HttpResponse> {
        export::export_payments(self, request, query).await
    }
}

pub(crate) async fn load_payment(
    storage: &dyn Storage,
    user: &User,
    id: i64,
) -> Result<Payment, HttpResponse> {
    match storage.get_payment_by_id(id).await {
        Ok(Some(payment)) => {
            tenant::ensure_visible(user, payment.school_id, "Payment")?;
            Ok(payment)
        }
        Ok(None) => Err(tenant::not_found("Payment")),
        Err(e) => Err(tenant::internal_error("Failed to retrieve payment", &e)),
    }
}
