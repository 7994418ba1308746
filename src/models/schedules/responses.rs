use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::ScheduleEntry;

/// 批量创建中失败的条目
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct BatchFailure {
    /// 在请求 entries 中的下标
    pub index: usize,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct BatchScheduleResponse {
    pub requested: usize,
    pub created: Vec<ScheduleEntry>,
    pub failed: Vec<BatchFailure>,
    pub atomic: bool,
}

impl BatchScheduleResponse {
    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }
}
