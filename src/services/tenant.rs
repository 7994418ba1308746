//! 租户隔离与通用响应
//!
//! 每个请求都以当前用户的 `school_id` 为边界：其他学校的资源一律按不存在处理（404），
//! 超级管理员是唯一可以跨租户的角色，创建租户内资源时必须显式指定 `school_id`。

use actix_web::HttpResponse;
use tracing::error;

use crate::errors::EcoleError;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::{SchoolFilter, Storage};
use crate::utils::validate::{FieldError, join_field_errors};

/// 当前登录用户
pub(crate) fn current_user(request: &actix_web::HttpRequest) -> Result<User, HttpResponse> {
    RequireJWT::extract_user(request).ok_or_else(|| {
        HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: missing user",
        ))
    })
}

/// 列表读取范围：超级管理员可按 `school_id` 过滤或读取全部，其他角色固定为本校
pub(crate) fn read_scope(user: &User, requested: Option<i64>) -> SchoolFilter {
    if user.role.is_cross_tenant() {
        requested
    } else {
        // 非超级管理员必有所属学校；缺失时用不可能命中的 id 兜底
        Some(user.school_id.unwrap_or(-1))
    }
}

/// 写入目标学校
pub(crate) async fn target_school(
    storage: &dyn Storage,
    user: &User,
    requested: Option<i64>,
) -> Result<i64, HttpResponse> {
    if !user.role.is_cross_tenant() {
        return user.school_id.ok_or_else(|| {
            HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::TenantMismatch,
                "User does not belong to a school",
            ))
        });
    }

    let Some(school_id) = requested else {
        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::SchoolRequired,
            "school_id is required",
        )));
    };

    match storage.get_school_by_id(school_id).await {
        Ok(Some(_)) => Ok(school_id),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SchoolNotFound,
            "School not found",
        ))),
        Err(e) => Err(internal_error("Failed to load school", &e)),
    }
}

/// 资源是否对当前用户可见；不可见与不存在同样返回 404
pub(crate) fn ensure_visible(user: &User, school_id: i64, label: &str) -> Result<(), HttpResponse> {
    if user.can_access_school(school_id) {
        Ok(())
    } else {
        Err(not_found(label))
    }
}

pub(crate) fn not_found(label: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::NotFound,
        format!("{label} not found"),
    ))
}

/// 字段校验失败：首个错误作为提示文案，完整列表放在 data 中
pub(crate) fn validation_failed(errors: Vec<FieldError>) -> HttpResponse {
    let message = join_field_errors(&errors);
    HttpResponse::BadRequest().json(ApiResponse::error(
        ErrorCode::ValidationFailed,
        errors,
        message,
    ))
}

pub(crate) fn internal_error(action: &str, e: &EcoleError) -> HttpResponse {
    error!("{}: {}", action, e);
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        format!("{action}: {}", e.message()),
    ))
}

/// 存储写入失败：唯一约束冲突为 409，其余为 500
pub(crate) fn write_error(code: ErrorCode, conflict_message: &str, e: &EcoleError) -> HttpResponse {
    if e.is_unique_violation() {
        HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::Conflict,
            conflict_message,
        ))
    } else {
        error!("{}: {}", conflict_message, e);
        HttpResponse::InternalServerError()
            .json(ApiResponse::error_empty(code, e.message().to_string()))
    }
}

/// 被引用的实体必须存在且属于同一学校
pub(crate) fn check_reference<T>(
    found: crate::errors::Result<Option<T>>,
    school_of: impl Fn(&T) -> i64,
    school_id: i64,
    field: &str,
) -> Result<(), HttpResponse> {
    match found {
        Ok(Some(item)) if school_of(&item) == school_id => Ok(()),
        Ok(_) => Err(validation_failed(vec![FieldError::new(
            field,
            format!("{field} does not reference a record of this school"),
        )])),
        Err(e) => Err(internal_error("Failed to check reference", &e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::{UserRole, UserStatus};

    fn user(role: UserRole, school_id: Option<i64>) -> User {
        let now = chrono::Utc::now();
        User {
            id: 1,
            school_id,
            email: "x@ecole.sn".into(),
            password_hash: String::new(),
            role,
            status: UserStatus::Active,
            display_name: None,
            last_login: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_read_scope() {
        let admin = user(UserRole::SchoolAdmin, Some(3));
        assert_eq!(read_scope(&admin, None), Some(3));
        assert_eq!(read_scope(&admin, Some(9)), Some(3));

        let root = user(UserRole::SuperAdmin, None);
        assert_eq!(read_scope(&root, None), None);
        assert_eq!(read_scope(&root, Some(9)), Some(9));
    }

    #[test]
    fn test_other_tenant_is_not_found() {
        let staff = user(UserRole::Staff, Some(3));
        assert!(ensure_visible(&staff, 3, "Student").is_ok());
        let resp = ensure_visible(&staff, 4, "Student").unwrap_err();
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_reference_must_share_school() {
        let ok = check_reference(Ok(Some(5_i64)), |s| *s, 5, "room_id");
        assert!(ok.is_ok());
        let other = check_reference(Ok(Some(6_i64)), |s| *s, 5, "room_id").unwrap_err();
        assert_eq!(other.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let missing = check_reference::<i64>(Ok(None), |s| *s, 5, "room_id").unwrap_err();
        assert_eq!(missing.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
