//! 数据模型定义
//!
//! 每个业务模块分为 entities（业务实体）、requests（请求体）与 responses（响应体）。

#[macro_use]
mod macros;

pub mod auth;
pub mod common;
pub mod evaluations;
pub mod payments;
pub mod permissions;
pub mod rooms;
pub mod schedules;
pub mod schools;
pub mod staff;
pub mod students;
pub mod teachers;
pub mod users;

pub use common::{
    ApiResponse, EMPTY_LIST_MESSAGE, ListQuery, ListResponse, Listable, SortOrder, SortValue,
    apply_list_view,
};

/// 业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    Unauthorized = 1001,
    PermissionDenied = 1003,
    NotFound = 1004,
    Conflict = 1009,

    // 认证
    LoginFailed = 2000,
    UserNotFound = 2001,
    UserDisabled = 2002,
    UserAlreadyExists = 2003,

    // 表单校验
    ValidationFailed = 3000,
    EmailInvalid = 3001,
    PhoneInvalid = 3002,
    RequiredFieldMissing = 3003,
    TimeRangeInvalid = 3004,

    // 租户
    TenantMismatch = 4000,
    SchoolRequired = 4001,
    SchoolNotFound = 4002,
    SchoolAlreadyExists = 4003,

    // 数据操作
    CreationFailed = 6000,
    UpdateFailed = 6001,
    DeleteFailed = 6002,
    ExportFailed = 6003,
    BatchPartiallyFailed = 6004,

    InternalServerError = 5000,
}
