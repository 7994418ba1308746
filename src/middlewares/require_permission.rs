/*!
 * 权限门控中间件
 *
 * 必须在 RequireJWT 之后使用。根据当前用户的角色（员工则加上存储中的显式授权）
 * 构建 `PermissionSet`，放入请求扩展，未授权时返回 403。
 *
 * ```rust,ignore
 * web::resource("")
 *     .route(web::get().to(list_students)
 *         .wrap(RequirePermission::new(PermissionCategory::Students, PermissionAction::View)))
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{error, info};

use crate::errors::Result;
use crate::models::{
    ErrorCode,
    permissions::{PermissionAction, PermissionCategory, PermissionSet},
    users::entities::{User, UserRole},
};
use crate::storage::Storage;

use super::create_error_response;

/// 构建用户的权限集合；只有员工需要读取存储
pub async fn resolve_permissions(storage: &dyn Storage, user: &User) -> Result<PermissionSet> {
    let grants = match user.role {
        UserRole::Staff => storage.list_staff_permissions(user.id).await?,
        _ => Vec::new(),
    };
    Ok(PermissionSet::for_role(&user.role, &grants))
}

#[derive(Clone, Copy)]
pub struct RequirePermission {
    category: PermissionCategory,
    action: PermissionAction,
}

impl RequirePermission {
    pub fn new(category: PermissionCategory, action: PermissionAction) -> Self {
        Self { category, action }
    }

    /// 读取中间件放入的权限集合
    pub fn extract_permissions(req: &actix_web::HttpRequest) -> Option<PermissionSet> {
        req.extensions().get::<PermissionSet>().cloned()
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequirePermission
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequirePermissionMiddleware<S>;
    type Future = Ready<std::result::Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequirePermissionMiddleware {
            service: Rc::new(service),
            category: self.category,
            action: self.action,
        }))
    }
}

pub struct RequirePermissionMiddleware<S> {
    service: Rc<S>,
    category: PermissionCategory,
    action: PermissionAction,
}

impl<S, B> Service<ServiceRequest> for RequirePermissionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, std::result::Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<std::result::Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let category = self.category;
        let action = self.action;

        Box::pin(async move {
            let user = req.extensions().get::<User>().cloned();
            let Some(user) = user else {
                info!("Permission check failed: RequireJWT must run first");
                return Ok(req.into_response(
                    create_error_response(
                        StatusCode::UNAUTHORIZED,
                        ErrorCode::Unauthorized,
                        "Authentication required",
                    )
                    .map_into_right_body(),
                ));
            };

            let Some(storage) = req
                .app_data::<web::Data<Arc<dyn Storage>>>()
                .map(|data| data.get_ref().clone())
            else {
                error!("Storage not found in app data");
                return Ok(req.into_response(
                    create_error_response(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorCode::InternalServerError,
                        "Storage unavailable",
                    )
                    .map_into_right_body(),
                ));
            };

            let permissions = match resolve_permissions(storage.as_ref(), &user).await {
                Ok(set) => set,
                Err(e) => {
                    error!("Failed to load permissions for user {}: {}", user.id, e);
                    return Ok(req.into_response(
                        create_error_response(
                            StatusCode::INTERNAL_SERVER_ERROR,
                            ErrorCode::InternalServerError,
                            "Failed to load permissions",
                        )
                        .map_into_right_body(),
                    ));
                }
            };

            if !permissions.allows(category, action) {
                info!(
                    "Permission {}.{} denied for user {} (role: {})",
                    category, action, user.id, user.role
                );
                return Ok(req.into_response(
                    create_error_response(
                        StatusCode::FORBIDDEN,
                        ErrorCode::PermissionDenied,
                        &format!("Permission denied: {category}.{action}"),
                    )
                    .map_into_right_body(),
                ));
            }

            req.extensions_mut().insert(permissions);
            Ok(srv.call(req).await?.map_into_left_body())
        })
    }
}
