pub mod batch;
pub mod create;
pub mod delete;
pub mod duplicate;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::tenant;
use crate::errors::Result;
use crate::models::schedules::{
    entities::ScheduleEntry,
    requests::{
        BatchScheduleRequest, CreateScheduleRequest, DuplicateScheduleRequest,
        ScheduleListParams, UpdateScheduleRequest,
    },
};
use crate::models::users::entities::User;
use crate::storage::Storage;
use crate::utils::validate::FieldError;

pub struct ScheduleService {
    storage: Option<Arc<dyn Storage>>,
}

impl ScheduleService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_schedules(
        &self,
        request: &HttpRequest,
        query: ScheduleListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_schedules(self, request, query).await
    }

    pub async fn create_schedule(
        &self,
        request: &HttpRequest,
        entry: CreateScheduleRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_schedule(self, request, entry).await
    }

    // 批量创建课表条目
    pub async fn create_batch(
        &self,
        request: &HttpRequest,
        batch: BatchScheduleRequest,
    ) -> ActixResult<HttpResponse> {
        batch::create_batch(self, request, batch).await
    }

    pub async fn get_schedule(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        get::get_schedule(self, request, id).await
    }

    pub async fn update_schedule(
        &self,
        request: &HttpRequest,
        id: i64,
        update_data: UpdateScheduleRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_schedule(self, request, id, update_data).await
    }

    pub async fn delete_schedule(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_schedule(self, request, id).await
    }

    // 以现有条目为模板复制
    pub async fn duplicate_schedule(
        &self,
        request: &HttpRequest,
        id: i64,
        overrides: DuplicateScheduleRequest,
    ) -> ActixResult<HttpResponse> {
        duplicate::duplicate_schedule(self, request, id, overrides).await
    }
}

pub(crate) async fn load_schedule(
    storage: &dyn Storage,
    user: &User,
    id: i64,
) -> std::result::Result<ScheduleEntry, HttpResponse> {
    match storage.get_schedule_by_id(id).await {
        Ok(Some(entry)) => {
            tenant::ensure_visible(user, entry.school_id, "Schedule entry")?;
            Ok(entry)
        }
        Ok(None) => Err(tenant::not_found("Schedule entry")),
        Err(e) => Err(tenant::internal_error("Failed to retrieve schedule entry", &e)),
    }
}

/// 条目的全部问题：字段规则，以及教室、教师是否属于同一学校
///
/// 不检测时间段重叠。
pub(crate) async fn entry_problems(
    storage: &dyn Storage,
    entry: &CreateScheduleRequest,
    school_id: i64,
) -> Result<Vec<FieldError>> {
    let mut problems = entry.validate().err().unwrap_or_default();

    let room_ok = storage
        .get_room_by_id(entry.room_id)
        .await?
        .is_some_and(|room| room.school_id == school_id);
    if !room_ok {
        problems.push(FieldError::new(
            "room_id",
            "room_id does not reference a record of this school",
        ));
    }

    let teacher_ok = storage
        .get_teacher_by_id(entry.teacher_id)
        .await?
        .is_some_and(|teacher| teacher.school_id == school_id);
    if !teacher_ok {
        problems.push(FieldError::new(
            "teacher_id",
            "teacher_id does not reference a record of this school",
        ));
    }

    Ok(problems)
}
