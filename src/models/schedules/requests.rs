use serde::Deserialize;
use ts_rs::TS;

use super::entities::ScheduleDay;
use crate::models::{ListQuery, SortOrder};
use crate::utils::validate::{FieldError, Validator, validate_time_range};

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct CreateScheduleRequest {
    pub room_id: i64,
    pub teacher_id: i64,
    pub subject: String,
    pub day: ScheduleDay,
    pub start_time: String,
    pub end_time: String,
    pub academic_year: String,
    pub school_id: Option<i64>,
}

impl CreateScheduleRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        Validator::new()
            .required("subject", &self.subject)
            .required("academic_year", &self.academic_year)
            .rule(
                "start_time",
                validate_time_range(&self.start_time, &self.end_time),
            )
            .finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct UpdateScheduleRequest {
    pub room_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub subject: Option<String>,
    pub day: Option<ScheduleDay>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub academic_year: Option<String>,
}

impl UpdateScheduleRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        if let Some(subject) = &self.subject {
            v.required("subject", subject);
        }
        if let Some(year) = &self.academic_year {
            v.required("academic_year", year);
        }
        v.finish()
    }
}

/// 复制课表条目，未给出的字段沿用原条目
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct DuplicateScheduleRequest {
    pub day: Option<ScheduleDay>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub room_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub academic_year: Option<String>,
}

/// 批量创建课表
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct BatchScheduleRequest {
    pub entries: Vec<CreateScheduleRequest>,
    /// 为 true 时在同一事务中创建，任一失败则全部回滚
    #[serde(default)]
    pub atomic: bool,
    pub school_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct ScheduleListParams {
    pub search: Option<String>,
    pub day: Option<String>,
    pub room_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub academic_year: Option<String>,
    pub school_id: Option<i64>,
    pub sort: Option<String>,
    pub order: Option<SortOrder>,
}

impl From<ScheduleListParams> for ListQuery {
    fn from(p: ScheduleListParams) -> Self {
        ListQuery::new()
            .search(p.search)
            .filter("day", p.day)
            .filter("room_id", p.room_id.map(|id| id.to_string()))
            .filter("teacher_id", p.teacher_id.map(|id| id.to_string()))
            .filter("academic_year", p.academic_year)
            .sort_by(p.sort, p.order)
    }
}
