//! 对象缓存
//!
//! 以字符串键值对存储，调用方自行序列化。目前仅用于按用户 id 缓存会话用户，
//! 账号状态变更或删除时由写入方清除。

pub mod moka;

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::Result;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}

/// 会话用户的缓存键
pub fn session_key(user_id: i64) -> String {
    format!("session_user:{user_id}")
}

pub async fn create_object_cache() -> Result<Arc<dyn ObjectCache>> {
    let cache = moka::MokaCacheWrapper::new()?;
    tracing::info!("Object cache backend: moka");
    Ok(Arc::new(cache))
}
