pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::tenant;
use crate::models::teachers::{
    entities::Teacher,
    requests::{CreateTeacherRequest, TeacherListParams, UpdateTeacherRequest},
};
use crate::models::users::entities::User;
use crate::storage::Storage;

pub struct TeacherService {
    storage: Option<Arc<dyn Storage>>,
}

impl TeacherService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_teachers(
        &self,
        request: &HttpRequest,
        query: TeacherListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_teachers(self, request, query).await
    }

    // 创建教师档案与登录账号
    pub async fn create_teacher(
        &self,
        request: &HttpRequest,
        teacher_data: CreateTeacherRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_teacher(self, request, teacher_data).await
    }

    pub async fn get_teacher(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        get::get_teacher(self, request, id).await
    }

    pub async fn update_teacher(
        &self,
        request: &HttpRequest,
        id: i64,
        update_data: UpdateTeacherRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_teacher(self, request, id, update_data).await
    }

    pub async fn delete_teacher(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        delete::delete_teacher(self, request, id).await
    }
}

pub(crate) async fn load_teacher(
    storage: &dyn Storage,
    user: &User,
    id: i64,
) -> Result<Teacher, HttpResponse> {
    match storage.get_teacher_by_id(id).await {
        Ok(Some(teacher)) => {
            tenant::ensure_visible(user, teacher.school_id, "Teacher")?;
            Ok(teacher)
        }
        Ok(None) => Err(tenant::not_found("Teacher")),
        Err(e) => Err(tenant::internal_error("Failed to retrieve teacher", &e)),
    }
}
