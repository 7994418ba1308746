pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod permissions;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::tenant;
use crate::models::staff::requests::{
    CreateStaffRequest, StaffListParams, UpdatePermissionsRequest, UpdateStaffRequest,
};
use crate::models::users::entities::{User, UserRole};
use crate::storage::Storage;

pub struct StaffService {
    storage: Option<Arc<dyn Storage>>,
}

impl StaffService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_staff(
        &self,
        request: &HttpRequest,
        query: StaffListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_staff(self, request, query).await
    }

    // 创建员工账号，返回一次性凭据
    pub async fn create_staff(
        &self,
        request: &HttpRequest,
        staff_data: CreateStaffRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_staff(self, request, staff_data).await
    }

    pub async fn get_staff(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        get::get_staff(self, request, id).await
    }

    pub async fn update_staff(
        &self,
        request: &HttpRequest,
        id: i64,
        update_data: UpdateStaffRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_staff(self, request, id, update_data).await
    }

    pub async fn delete_staff(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        delete::delete_staff(self, request, id).await
    }

    // 整体替换员工授权
    pub async fn update_permissions(
        &self,
        request: &HttpRequest,
        id: i64,
        update_data: UpdatePermissionsRequest,
    ) -> ActixResult<HttpResponse> {
        permissions::update_permissions(self, request, id, update_data).await
    }
}

/// 读取当前租户内的员工账号；其他角色的账号同样视为不存在
pub(crate) async fn load_staff_user(
    storage: &dyn Storage,
    current: &User,
    id: i64,
) -> Result<User, HttpResponse> {
    match storage.get_user_by_id(id).await {
        Ok(Some(user)) if user.role == UserRole::Staff => {
            let school_id = user.school_id.ok_or_else(|| tenant::not_found("Staff member"))?;
            tenant::ensure_visible(current, school_id, "Staff member")?;
            Ok(user)
        }
        Ok(_) => Err(tenant::not_found("Staff member")),
        Err(e) => Err(tenant::internal_error("Failed to retrieve staff member", &e)),
    }
}
