use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::cache::{ObjectCache, create_object_cache};
use crate::errors::Result;
use crate::models::users::entities::{NewUser, UserRole};
use crate::storage::Storage;
use crate::utils::password::hash_password;
use crate::utils::random_code::generate_password;

/// 默认超级管理员邮箱，可用 ADMIN_EMAIL 覆盖
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@ecole.local";

/// 生成的超级管理员密码长度
const ADMIN_PASSWORD_LENGTH: usize = 16;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

/// 初始化默认超级管理员
/// 数据库中没有任何用户时创建，已有用户则跳过
pub async fn seed_super_admin(storage: &dyn Storage) -> Result<()> {
    let count = storage.count_users().await?;
    if count > 0 {
        debug!(
            "Database already has {} user(s), skipping super admin seed",
            count
        );
        return Ok(());
    }
    info!("No users found in database, creating default super admin account...");

    // 获取密码：优先从环境变量，否则生成随机密码
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_password(ADMIN_PASSWORD_LENGTH);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated super admin password: {}", pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });
    let email = std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string());

    let admin = storage
        .create_user(NewUser {
            school_id: None,
            email,
            password_hash: hash_password(&password)?,
            role: UserRole::SuperAdmin,
            display_name: Some("Super Administrator".to_string()),
        })
        .await?;
    info!(
        "Default super admin created (ID: {}, email: {})",
        admin.id, admin.email
    );
    Ok(())
}

/// 准备服务器启动的上下文
/// 包括存储（含迁移）、默认账号与缓存
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    // 超级管理员创建失败不阻止启动
    if let Err(e) = seed_super_admin(storage.as_ref()).await {
        warn!("Failed to seed super admin: {}", e);
    }

    let cache = create_object_cache().await?;
    warn!("Cache backend initialized");

    Ok(StartupContext { storage, cache })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sea_orm_storage::SeaOrmStorage;

    #[tokio::test]
    async fn test_seed_runs_once() {
        let storage = SeaOrmStorage::in_memory().await.unwrap();
        seed_super_admin(&storage).await.unwrap();
        seed_super_admin(&storage).await.unwrap();
        assert_eq!(storage.count_users().await.unwrap(), 1);

        let admins = storage
            .list_users_by_role(None, UserRole::SuperAdmin)
            .await
            .unwrap();
        assert_eq!(admins.len(), 1);
        assert_eq!(admins[0].school_id, None);
    }
}
