use super::{SeaOrmStorage, db_error};
use crate::entity::users::{ActiveModel, Column, Entity as Users, Model};
use crate::errors::Result;
use crate::models::users::entities::{NewUser, User, UserRole, UserStatus};
use crate::storage::{SchoolFilter, UserUpdate};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

/// 插入用户，可在事务中复用
pub(super) async fn insert_user<C: ConnectionTrait>(conn: &C, user: NewUser) -> Result<Model> {
    let now = chrono::Utc::now().timestamp();

    let model = ActiveModel {
        school_id: Set(user.school_id),
        email: Set(user.email),
        password_hash: Set(user.password_hash),
        role: Set(user.role.to_string()),
        status: Set(UserStatus::Active.to_string()),
        display_name: Set(user.display_name),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    model.insert(conn).await.map_err(db_error("创建用户失败"))
}

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, user: NewUser) -> Result<User> {
        Ok(insert_user(&self.db, user).await?.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询用户失败"))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过邮箱获取用户
    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_error("查询用户失败"))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 按角色列出用户
    pub async fn list_users_by_role_impl(
        &self,
        school: SchoolFilter,
        role: UserRole,
    ) -> Result<Vec<User>> {
        let mut select = Users::find().filter(Column::Role.eq(role.to_string()));
        if let Some(school_id) = school {
            select = select.filter(Column::SchoolId.eq(school_id));
        }

        let users = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询用户列表失败"))?;

        Ok(users.into_iter().map(|m| m.into_user()).collect())
    }

    /// 更新用户信息
    pub async fn update_user_impl(&self, id: i64, update: UserUpdate) -> Result<Option<User>> {
        if self.get_user_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(display_name) = update.display_name {
            model.display_name = Set(Some(display_name));
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(db_error("更新用户失败"))?;

        self.get_user_by_id_impl(id).await
    }

    /// 删除用户
    pub async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        let result = Users::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除用户失败"))?;

        Ok(result.rows_affected > 0)
    }

    /// 更新用户最后登录时间
    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Users::update_many()
            .col_expr(Column::LastLogin, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_error("更新最后登录时间失败"))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计用户数量
    pub async fn count_users_impl(&self) -> Result<u64> {
        Users::find()
            .count(&self.db)
            .await
            .map_err(db_error("统计用户数量失败"))
    }
}
