//! 账号开通：教师、员工与学校管理员创建时生成一次性密码

use actix_web::HttpResponse;

use super::tenant;
use crate::models::users::entities::{Credentials, NewUser, UserRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::password::hash_password;
use crate::utils::random_code::{GENERATED_PASSWORD_LENGTH, generate_password};

/// 登录邮箱全局唯一
pub(crate) async fn ensure_email_free(storage: &dyn Storage, email: &str) -> Result<(), HttpResponse> {
    match storage.get_user_by_email(email).await {
        Ok(None) => Ok(()),
        Ok(Some(_)) => Err(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::UserAlreadyExists,
            format!("An account with email {email} already exists"),
        ))),
        Err(e) => Err(tenant::internal_error("Failed to check email", &e)),
    }
}

/// 生成密码并哈希，返回待写入的账号与明文凭据
pub(crate) fn provision_account(
    school_id: Option<i64>,
    email: &str,
    role: UserRole,
    display_name: Option<String>,
) -> Result<(NewUser, Credentials), HttpResponse> {
    let password = generate_password(GENERATED_PASSWORD_LENGTH);
    let password_hash = hash_password(&password)
        .map_err(|e| tenant::internal_error("Failed to hash password", &e))?;

    let account = NewUser {
        school_id,
        email: email.to_string(),
        password_hash,
        role,
        display_name,
    };
    let credentials = Credentials {
        email: email.to_string(),
        password,
    };
    Ok((account, credentials))
}
