pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::schools::requests::{CreateSchoolRequest, SchoolListParams, UpdateSchoolRequest};
use crate::storage::Storage;

pub struct SchoolService {
    storage: Option<Arc<dyn Storage>>,
}

impl SchoolService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_schools(
        &self,
        request: &HttpRequest,
        query: SchoolListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_schools(self, request, query).await
    }

    // 创建学校，可同时开通学校管理员
    pub async fn create_school(
        &self,
        request: &HttpRequest,
        school_data: CreateSchoolRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_school(self, request, school_data).await
    }

    pub async fn get_school(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        get::get_school(self, request, id).await
    }

    pub async fn update_school(
        &self,
        request: &HttpRequest,
        id: i64,
        update_data: UpdateSchoolRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_school(self, request, id, update_data).await
    }

    // 删除学校，级联删除其全部数据
    pub async fn delete_school(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        delete::delete_school(self, request, id).await
    }
}
