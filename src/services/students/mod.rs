pub mod create;
pub mod delete;
pub mod export;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::tenant;
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, StudentListParams, UpdateStudentRequest},
};
use crate::models::users::entities::User;
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_students(
        &self,
        request: &HttpRequest,
        query: StudentListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_students(self, request, query).await
    }

    pub async fn create_student(
        &self,
        request: &HttpRequest,
        student_data: CreateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_student(self, request, student_data).await
    }

    pub async fn get_student(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        get::get_student(self, request, id).await
    }

    pub async fn update_student(
        &self,
        request: &HttpRequest,
        id: i64,
        update_data: UpdateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, request, id, update_data).await
    }

    pub async fn delete_student(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        delete::delete_student(self, request, id).await
    }

    // 导出筛选后的学生名单（CSV）
    pub async fn export_students(
        &self,
        request: &HttpRequest,
        query: StudentListParams,
    ) -> ActixResult<HttpResponse> {
        export::export_students(self, request, query).await
    }
}

pub(crate) async fn load_student(
    storage: &dyn Storage,
    user: &User,
    id: i64,
) -> Result<Student, HttpResponse> {
    match storage.get_student_by_id(id).await {
        Ok(Some(student)) => {
            tenant::ensure_visible(user, student.school_id, "Student")?;
            Ok(student)
        }
        Ok(None) => Err(tenant::not_found("Student")),
        Err(e) => Err(tenant::internal_error("Failed to retrieve student", &e)),
    }
}

/// 学生所在班级必须属于同一学校
pub(crate) async fn check_room(
    storage: &dyn Storage,
    room_id: Option<i64>,
    school_id: i64,
) -> Result<(), HttpResponse> {
    match room_id {
        Some(room_id) => tenant::check_reference(
            storage.get_room_by_id(room_id).await,
            |room| room.school_id,
            school_id,
            "room_id",
        ),
        None => Ok(()),
    }
}
