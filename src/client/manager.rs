use serde::de::DeserializeOwned;
use serde_json::Value;

use super::form::{DialogController, SubmitError};
use super::toast::{Toast, ToastSink};
use super::transport::{Method, Transport};
use crate::models::permissions::{
    GateDecision, PermissionAction, PermissionCategory, PermissionGate, PermissionSet,
};
use crate::models::{ListQuery, Listable, apply_list_view};

/// 单个实体集合的管理器：持有最近一次拉取的完整列表
///
/// 任何变更成功后都整体重新拉取，不做局部更新。
pub struct EntityManager<T> {
    collection: String,
    category: PermissionCategory,
    items: Vec<T>,
    query: ListQuery,
}

impl<T> EntityManager<T>
where
    T: DeserializeOwned + Listable + Clone,
{
    pub fn new(collection: impl Into<String>, category: PermissionCategory) -> Self {
        Self {
            collection: collection.into(),
            category,
            items: Vec::new(),
            query: ListQuery::new(),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn set_query(&mut self, query: ListQuery) {
        self.query = query;
    }

    /// 应用搜索、筛选与排序后的列表
    pub fn visible_items(&self) -> Vec<T> {
        apply_list_view(self.items.clone(), &self.query)
    }

    pub fn gate(&self, action: PermissionAction, permissions: &PermissionSet) -> GateDecision {
        PermissionGate::new(self.category, action).evaluate(permissions)
    }

    /// 拉取完整集合，替换本地数组
    pub async fn refresh(&mut self, transport: &dyn Transport) -> Result<usize, SubmitError> {
        let response = transport.send(Method::Get, &self.collection, None).await?;
        if !response.is_success() {
            return Err(SubmitError::Rejected {
                status: response.status,
                message: response.error_message(),
            });
        }

        let items = response
            .data()
            .get("items")
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()));
        self.items = serde_json::from_value(items)
            .map_err(|e| SubmitError::Transport(format!("Invalid list payload: {e}")))?;
        Ok(self.items.len())
    }

    async fn refetch_after(&mut self, transport: &dyn Transport, toasts: &dyn ToastSink) {
        if let Err(e) = self.refresh(transport).await {
            toasts.push(Toast::error("Failed to refresh list", Some(e.to_string())));
        }
    }

    /// 提交对话框，成功后重新拉取
    pub async fn submit(
        &mut self,
        dialog: &mut DialogController,
        transport: &dyn Transport,
        toasts: &dyn ToastSink,
    ) -> Result<Value, SubmitError> {
        let data = dialog.submit(transport, toasts).await?;
        self.refetch_after(transport, toasts).await;
        Ok(data)
    }

    pub async fn confirm_delete(
        &mut self,
        dialog: &mut DialogController,
        transport: &dyn Transport,
        toasts: &dyn ToastSink,
    ) -> Result<Value, SubmitError> {
        let data = dialog.confirm_delete(transport, toasts).await?;
        self.refetch_after(transport, toasts).await;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::form::FormSchema;
    use crate::client::testing::FakeTransport;
    use crate::client::toast::ToastLog;
    use crate::client::transport::TransportResponse;
    use crate::models::permissions::Permission;
    use crate::models::rooms::entities::Room;
    use crate::models::users::entities::UserRole;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    fn room_json(id: i64, name: &str, capacity: i64) -> Value {
        json!({
            "id": id,
            "school_id": 1,
            "name": name,
            "capacity": capacity,
            "building": null,
            "created_at": "2025-03-01T08:00:00Z",
            "updated_at": "2025-03-01T08:00:00Z",
        })
    }

    /// 模拟服务端：POST 追加，DELETE 移除，GET 返回全部
    fn server() -> FakeTransport {
        let rooms = Arc::new(Mutex::new(vec![room_json(1, "Salle A", 40)]));
        FakeTransport::new(move |method, path, body| {
            let mut rooms = rooms.lock().unwrap();
            let data = match method {
                Method::Get => json!({ "items": rooms.clone(), "total": rooms.len() }),
                Method::Post => {
                    let body = body.cloned().unwrap_or_default();
                    let id = rooms.len() as i64 + 1;
                    let created = room_json(
                        id,
                        body["name"].as_str().unwrap_or_default(),
                        body["capacity"].as_i64().unwrap_or_default(),
                    );
                    rooms.push(created.clone());
                    created
                }
                Method::Delete => {
                    let id: i64 = path.rsplit('/').next().unwrap().parse().unwrap();
                    rooms.retain(|r| r["id"] != id);
                    Value::Null
                }
                Method::Put => Value::Null,
            };
            Ok(TransportResponse {
                status: 200,
                body: json!({ "code": 0, "message": "OK", "data": data }),
            })
        })
    }

    #[tokio::test]
    async fn test_create_then_refetch_shows_item() {
        let transport = server();
        let toasts = ToastLog::new();
        let mut manager: EntityManager<Room> =
            EntityManager::new("/api/v1/rooms", PermissionCategory::Rooms);
        assert_eq!(manager.refresh(&transport).await.unwrap(), 1);

        let mut dialog = DialogController::new("/api/v1/rooms", FormSchema::room());
        dialog.open_create();
        dialog.set_field("name", "Salle B");
        dialog.set_field("capacity", "25");
        manager.submit(&mut dialog, &transport, &toasts).await.unwrap();

        let names: Vec<_> = manager.items().iter().map(|r| r.name.clone()).collect();
        assert_eq!(names, vec!["Salle A", "Salle B"]);

        dialog.request_delete(1);
        manager
            .confirm_delete(&mut dialog, &transport, &toasts)
            .await
            .unwrap();
        let names: Vec<_> = manager.items().iter().map(|r| r.name.clone()).collect();
        assert_eq!(names, vec!["Salle B"]);
    }

    #[tokio::test]
    async fn test_visible_items_apply_query() {
        let transport = server();
        let toasts = ToastLog::new();
        let mut manager: EntityManager<Room> =
            EntityManager::new("/api/v1/rooms", PermissionCategory::Rooms);
        let mut dialog = DialogController::new("/api/v1/rooms", FormSchema::room());
        dialog.open_create();
        dialog.set_field("name", "Amphi");
        dialog.set_field("capacity", "200");
        manager.submit(&mut dialog, &transport, &toasts).await.unwrap();

        manager.set_query(ListQuery::new().search(Some("salle".into())));
        assert_eq!(manager.visible_items().len(), 1);

        manager.set_query(ListQuery::new().search(Some("zzz".into())));
        assert!(manager.visible_items().is_empty());
        assert_eq!(manager.items().len(), 2);
    }

    #[test]
    fn test_gate_uses_grants() {
        let manager: EntityManager<Room> =
            EntityManager::new("/api/v1/rooms", PermissionCategory::Rooms);
        let grants = [Permission::new(PermissionCategory::Rooms, PermissionAction::View)];
        let staff = PermissionSet::for_role(&UserRole::Staff, &grants);
        assert!(manager.gate(PermissionAction::View, &staff).is_enabled());
        assert!(!manager.gate(PermissionAction::Create, &staff).is_enabled());
    }
}
