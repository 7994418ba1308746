use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequirePermission};
use crate::models::permissions::{PermissionAction, PermissionCategory};
use crate::models::schedules::requests::{
    BatchScheduleRequest, CreateScheduleRequest, DuplicateScheduleRequest, ScheduleListParams,
    UpdateScheduleRequest,
};
use crate::services::ScheduleService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ScheduleService 实例
static SCHEDULE_SERVICE: Lazy<ScheduleService> = Lazy::new(ScheduleService::new_lazy);

fn gate(action: PermissionAction) -> RequirePermission {
    RequirePermission::new(PermissionCategory::Schedules, action)
}

pub async fn list_schedules(
    req: HttpRequest,
    query: web::Query<ScheduleListParams>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .list_schedules(&req, query.into_inner())
        .await
}

pub async fn create_schedule(
    req: HttpRequest,
    entry: web::Json<CreateScheduleRequest>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .create_schedule(&req, entry.into_inner())
        .await
}

pub async fn create_batch(
    req: HttpRequest,
    batch: web::Json<BatchScheduleRequest>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE.create_batch(&req, batch.into_inner()).await
}

pub async fn get_schedule(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE.get_schedule(&req, id.0).await
}

pub async fn update_schedule(
    req: HttpRequest,
    id: SafeIDI64,
    update_data: web::Json<UpdateScheduleRequest>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .update_schedule(&req, id.0, update_data.into_inner())
        .await
}

pub async fn delete_schedule(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE.delete_schedule(&req, id.0).await
}

pub async fn duplicate_schedule(
    req: HttpRequest,
    id: SafeIDI64,
    overrides: Option<web::Json<DuplicateScheduleRequest>>,
) -> ActixResult<HttpResponse> {
    // 请求体可省略，省略时原样复制
    let overrides = overrides.map(|o| o.into_inner()).unwrap_or_default();
    SCHEDULE_SERVICE
        .duplicate_schedule(&req, id.0, overrides)
        .await
}

// 配置路由
pub fn configure_schedule_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/schedules")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_schedules).wrap(gate(PermissionAction::View)))
                    .route(
                        web::post()
                            .to(create_schedule)
                            .wrap(gate(PermissionAction::Create)),
                    ),
            )
            .service(
                web::resource("/batch").route(
                    web::post()
                        .to(create_batch)
                        .wrap(gate(PermissionAction::Create)),
                ),
            )
            .service(
                web::resource("/{id}/duplicate").route(
                    web::post()
                        .to(duplicate_schedule)
                        .wrap(gate(PermissionAction::Create)),
                ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_schedule).wrap(gate(PermissionAction::View)))
                    .route(
                        web::put()
                            .to(update_schedule)
                            .wrap(gate(PermissionAction::Edit)),
                    )
                    .route(
                        web::delete()
                            .to(delete_schedule)
                            .wrap(gate(PermissionAction::Delete)),
                    ),
            ),
    );
}
