use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequirePermission};
use crate::models::permissions::{PermissionAction, PermissionCategory};
use crate::models::staff::requests::{
    CreateStaffRequest, StaffListParams, UpdatePermissionsRequest, UpdateStaffRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::StaffService;
use crate::utils::SafeIDI64;

// 懒加载的全局 StaffService 实例
static STAFF_SERVICE: Lazy<StaffService> = Lazy::new(StaffService::new_lazy);

fn gate(action: PermissionAction) -> RequirePermission {
    RequirePermission::new(PermissionCategory::Staff, action)
}

pub async fn list_staff(
    req: HttpRequest,
    query: web::Query<StaffListParams>,
) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.list_staff(&req, query.into_inner()).await
}

pub async fn create_staff(
    req: HttpRequest,
    staff_data: web::Json<CreateStaffRequest>,
) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.create_staff(&req, staff_data.into_inner()).await
}

pub async fn get_staff(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.get_staff(&req, id.0).await
}

pub async fn update_staff(
    req: HttpRequest,
    id: SafeIDI64,
    update_data: web::Json<UpdateStaffRequest>,
) -> ActixResult<HttpResponse> {
    STAFF_SERVICE
        .update_staff(&req, id.0, update_data.into_inner())
        .await
}

pub async fn delete_staff(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.delete_staff(&req, id.0).await
}

pub async fn update_permissions(
    req: HttpRequest,
    id: SafeIDI64,
    update_data: web::Json<UpdatePermissionsRequest>,
) -> ActixResult<HttpResponse> {
    STAFF_SERVICE
        .update_permissions(&req, id.0, update_data.into_inner())
        .await
}

// 配置路由
pub fn configure_staff_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/staff")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_staff).wrap(gate(PermissionAction::View)))
                    .route(
                        web::post()
                            .to(create_staff)
                            .wrap(gate(PermissionAction::Create)),
                    ),
            )
            .service(
                web::resource("/{id}/permissions").route(
                    web::put()
                        .to(update_permissions)
                        .wrap(gate(PermissionAction::Edit))
                        // 员工不能修改授权，避免自行提权
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_staff).wrap(gate(PermissionAction::View)))
                    .route(
                        web::put()
                            .to(update_staff)
                            .wrap(gate(PermissionAction::Edit)),
                    )
                    .route(
                        web::delete()
                            .to(delete_staff)
                            .wrap(gate(PermissionAction::Delete)),
                    ),
            ),
    );
}
