use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::{Listable, SortValue};

define_str_enum! {
    /// 上课日（周一至周六）
    #[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
    pub enum ScheduleDay {
        Monday => "MONDAY",
        Tuesday => "TUESDAY",
        Wednesday => "WEDNESDAY",
        Thursday => "THURSDAY",
        Friday => "FRIDAY",
        Saturday => "SATURDAY",
    }
}

impl ScheduleDay {
    /// 周内序号，周一为 1
    pub fn ordinal(&self) -> i64 {
        match self {
            ScheduleDay::Monday => 1,
            ScheduleDay::Tuesday => 2,
            ScheduleDay::Wednesday => 3,
            ScheduleDay::Thursday => 4,
            ScheduleDay::Friday => 5,
            ScheduleDay::Saturday => 6,
        }
    }
}

/// 课表条目
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct ScheduleEntry {
    pub id: i64,
    pub school_id: i64,
    pub room_id: i64,
    pub teacher_id: i64,
    pub subject: String,
    pub day: ScheduleDay,
    pub start_time: String,
    pub end_time: String,
    pub academic_year: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Listable for ScheduleEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.subject.as_str(), self.academic_year.as_str()]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "day" => Some(self.day.to_string()),
            "room_id" => Some(self.room_id.to_string()),
            "teacher_id" => Some(self.teacher_id.to_string()),
            "academic_year" => Some(self.academic_year.clone()),
            _ => None,
        }
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "day" => Some(self.day.ordinal().into()),
            "start_time" => Some(self.start_time.as_str().into()),
            "subject" => Some(self.subject.as_str().into()),
            // 按周内时间排序：日序号 + 开始时间
            "slot" => Some(format!("{}-{}", self.day.ordinal(), self.start_time).into()),
            _ => None,
        }
    }
}
