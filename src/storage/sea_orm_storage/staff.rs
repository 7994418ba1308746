use std::collections::HashMap;

use super::{SeaOrmStorage, db_error, users::insert_user};
use crate::entity::staff_permissions::{ActiveModel, Column, Entity as StaffPermissions};
use crate::errors::{EcoleError, Result};
use crate::models::permissions::Permission;
use crate::models::users::entities::{NewUser, User};
use crate::storage::SchoolFilter;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

/// 写入授权，重复项只保留一条
async fn insert_permissions<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
    school_id: i64,
    permissions: &[Permission],
) -> Result<Vec<Permission>> {
    let now = chrono::Utc::now().timestamp();
    let mut unique: Vec<Permission> = permissions.to_vec();
    unique.sort();
    unique.dedup();

    for permission in &unique {
        ActiveModel {
            school_id: Set(school_id),
            user_id: Set(user_id),
            category: Set(permission.category.to_string()),
            action: Set(permission.action.to_string()),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(conn)
        .await
        .map_err(db_error("写入员工授权失败"))?;
    }

    Ok(unique)
}

impl SeaOrmStorage {
    /// 创建员工账号及授权
    pub async fn create_staff_impl(
        &self,
        user: NewUser,
        permissions: &[Permission],
    ) -> Result<(User, Vec<Permission>)> {
        let school_id = user
            .school_id
            .ok_or_else(|| EcoleError::validation("Staff account must belong to a school"))?;
        let txn = self.db.begin().await.map_err(db_error("开启事务失败"))?;

        let user = insert_user(&txn, user).await?;
        let granted = insert_permissions(&txn, user.id, school_id, permissions).await?;

        txn.commit().await.map_err(db_error("提交事务失败"))?;
        Ok((user.into_user(), granted))
    }

    pub async fn list_staff_permissions_impl(&self, user_id: i64) -> Result<Vec<Permission>> {
        let rows = StaffPermissions::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询员工授权失败"))?;

        Ok(rows.into_iter().filter_map(|m| m.into_permission()).collect())
    }

    /// 按用户分组的授权
    pub async fn list_school_staff_permissions_impl(
        &self,
        school: SchoolFilter,
    ) -> Result<HashMap<i64, Vec<Permission>>> {
        let mut select = StaffPermissions::find();
        if let Some(school_id) = school {
            select = select.filter(Column::SchoolId.eq(school_id));
        }

        let rows = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询员工授权失败"))?;

        let mut grouped: HashMap<i64, Vec<Permission>> = HashMap::new();
        for row in rows {
            let user_id = row.user_id;
            if let Some(permission) = row.into_permission() {
                grouped.entry(user_id).or_default().push(permission);
            }
        }
        Ok(grouped)
    }

    /// 删除旧授权并写入新授权
    pub async fn replace_staff_permissions_impl(
        &self,
        user_id: i64,
        school_id: i64,
        permissions: &[Permission],
    ) -> Result<Vec<Permission>> {
        let txn = self.db.begin().await.map_err(db_error("开启事务失败"))?;

        StaffPermissions::delete_many()
            .filter(Column::UserId.eq(user_id))
            .exec(&txn)
            .await
            .map_err(db_error("删除员工授权失败"))?;
        let granted = insert_permissions(&txn, user_id, school_id, permissions).await?;

        txn.commit().await.map_err(db_error("提交事务失败"))?;
        Ok(granted)
    }
}
