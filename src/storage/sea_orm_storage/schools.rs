use super::{SeaOrmStorage, db_error, users::insert_user};
use crate::entity::schools::{ActiveModel, Column, Entity as Schools};
use crate::errors::Result;
use crate::models::schools::{
    entities::{School, SchoolStatus},
    requests::{CreateSchoolRequest, UpdateSchoolRequest},
};
use crate::models::users::entities::{NewUser, User};
use crate::storage::SchoolFilter;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建学校，管理员账号与学校在同一事务中写入
    pub async fn create_school_impl(
        &self,
        req: CreateSchoolRequest,
        admin: Option<NewUser>,
    ) -> Result<(School, Option<User>)> {
        let now = chrono::Utc::now().timestamp();
        let txn = self.db.begin().await.map_err(db_error("开启事务失败"))?;

        let model = ActiveModel {
            name: Set(req.name.trim().to_string()),
            code: Set(req.code.trim().to_string()),
            address: Set(req.address),
            phone: Set(req.phone),
            email: Set(req.email),
            status: Set(SchoolStatus::Active.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let school = model.insert(&txn).await.map_err(db_error("创建学校失败"))?;

        let admin = match admin {
            Some(mut account) => {
                account.school_id = Some(school.id);
                Some(insert_user(&txn, account).await?.into_user())
            }
            None => None,
        };

        txn.commit().await.map_err(db_error("提交事务失败"))?;
        Ok((school.into_school(), admin))
    }

    pub async fn get_school_by_id_impl(&self, id: i64) -> Result<Option<School>> {
        let result = Schools::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询学校失败"))?;

        Ok(result.map(|m| m.into_school()))
    }

    /// 列出学校；限定租户时只返回该学校
    pub async fn list_schools_impl(&self, school: SchoolFilter) -> Result<Vec<School>> {
        let mut select = Schools::find();
        if let Some(school_id) = school {
            select = select.filter(Column::Id.eq(school_id));
        }

        let schools = select
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(db_error("查询学校列表失败"))?;

        Ok(schools.into_iter().map(|m| m.into_school()).collect())
    }

    pub async fn update_school_impl(
        &self,
        id: i64,
        update: UpdateSchoolRequest,
    ) -> Result<Option<School>> {
        if self.get_school_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name.trim().to_string());
        }
        if let Some(code) = update.code {
            model.code = Set(code.trim().to_string());
        }
        if let Some(address) = update.address {
            model.address = Set(Some(address));
        }
        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }
        if let Some(email) = update.email {
            model.email = Set(Some(email));
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(db_error("更新学校失败"))?;

        self.get_school_by_id_impl(id).await
    }

    /// 删除学校（级联删除租户下全部数据）
    pub async fn delete_school_impl(&self, id: i64) -> Result<bool> {
        let result = Schools::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除学校失败"))?;

        Ok(result.rows_affected > 0)
    }
}
