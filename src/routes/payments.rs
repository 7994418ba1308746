use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequirePermission};
use crate::models::payments::requests::{
    CreatePaymentRequest, PaymentListParams, UpdatePaymentRequest,
};
use crate::models::permissions::{PermissionAction, PermissionCategory};
use crate::services::PaymentService;
use crate::utils::SafeIDI64;

// 懒加载的全局 PaymentService 实例
static PAYMENT_SERVICE: Lazy<PaymentService> = Lazy::new(PaymentService::new_lazy);

fn gate(action: PermissionAction) -> RequirePermission {
    RequirePermission::new(PermissionCategory::Payments, action)
}

pub async fn list_payments(
    req: HttpRequest,
    query: web::Query<PaymentListParams>,
) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE.list_payments(&req, query.into_inner()).await
}

pub async fn export_payments(
    req: HttpRequest,
    query: web::Query<PaymentListParams>,
) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE
        .export_payments(&req, query.into_inner())
        .await
}

pub async fn create_payment(
    req: HttpRequest,
    payment_data: web::Json<CreatePaymentRequest>,
) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE
        .create_payment(&req, payment_data.into_inner())
        .await
}

pub async fn get_payment(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE.get_payment(&req, id.0).await
}

pub async fn update_payment(
    req: HttpRequest,
    id: SafeIDI64,
    update_data: web::Json<UpdatePaymentRequest>,
) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE
        .update_payment(&req, id.0, update_data.into_inner())
        .await
}

pub async fn delete_payment(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE.delete_payment(&req, id.0).await
}

// 配置路由
pub fn configure_payment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/payments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_payments).wrap(gate(PermissionAction::View)))
                    .route(
                        web::post()
                            .to(create_payment)
                            .wrap(gate(PermissionAction::Create)),
                    ),
            )
            // 必须在 /{id} 之前注册
            .service(
                web::resource("/export")
                    .route(web::get().to(export_payments).wrap(gate(PermissionAction::View))),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_payment).wrap(gate(PermissionAction::View)))
                    .route(
                        web::put()
                            .to(update_payment)
                            .wrap(gate(PermissionAction::Edit)),
                    )
                    .route(
                        web::delete()
                            .to(delete_payment)
                            .wrap(gate(PermissionAction::Delete)),
                    ),
            ),
    );
}
