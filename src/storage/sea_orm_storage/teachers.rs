use super::{SeaOrmStorage, db_error, users::insert_user};
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::entity::users::Entity as Users;
use crate::errors::Result;
use crate::models::teachers::{
    entities::Teacher,
    requests::{CreateTeacherRequest, UpdateTeacherRequest},
};
use crate::models::users::entities::NewUser;
use crate::storage::SchoolFilter;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建教师档案及其登录账号
    pub async fn create_teacher_impl(
        &self,
        school_id: i64,
        req: CreateTeacherRequest,
        account: NewUser,
    ) -> Result<Teacher> {
        let now = chrono::Utc::now().timestamp();
        let txn = self.db.begin().await.map_err(db_error("开启事务失败"))?;

        let user = insert_user(&txn, account).await?;

        let model = ActiveModel {
            school_id: Set(school_id),
            user_id: Set(Some(user.id)),
            nom: Set(req.nom.trim().to_string()),
            prenom: Set(req.prenom.trim().to_string()),
            email: Set(req.email.trim().to_string()),
            telephone: Set(req.telephone.trim().to_string()),
            teacher_type: Set(req.teacher_type.to_string()),
            grade: Set(req.grade.to_string()),
            specialite: Set(req.specialite),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let teacher = model.insert(&txn).await.map_err(db_error("创建教师失败"))?;

        txn.commit().await.map_err(db_error("提交事务失败"))?;
        Ok(teacher.into_teacher())
    }

    pub async fn get_teacher_by_id_impl(&self, id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询教师失败"))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    pub async fn list_teachers_impl(&self, school: SchoolFilter) -> Result<Vec<Teacher>> {
        let mut select = Teachers::find();
        if let Some(school_id) = school {
            select = select.filter(Column::SchoolId.eq(school_id));
        }

        let teachers = select
            .order_by_asc(Column::Nom)
            .order_by_asc(Column::Prenom)
            .all(&self.db)
            .await
            .map_err(db_error("查询教师列表失败"))?;

        Ok(teachers.into_iter().map(|m| m.into_teacher()).collect())
    }

    pub async fn update_teacher_impl(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        if self.get_teacher_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(nom) = update.nom {
            model.nom = Set(nom.trim().to_string());
        }
        if let Some(prenom) = update.prenom {
            model.prenom = Set(prenom.trim().to_string());
        }
        if let Some(email) = update.email {
            model.email = Set(email.trim().to_string());
        }
        if let Some(telephone) = update.telephone {
            model.telephone = Set(telephone.trim().to_string());
        }
        if let Some(teacher_type) = update.teacher_type {
            model.teacher_type = Set(teacher_type.to_string());
        }
        if let Some(grade) = update.grade {
            model.grade = Set(grade.to_string());
        }
        if let Some(specialite) = update.specialite {
            model.specialite = Set(Some(specialite));
        }

        model
            .update(&self.db)
            .await
            .map_err(db_error("更新教师失败"))?;

        self.get_teacher_by_id_impl(id).await
    }

    /// 删除教师，同时删除其登录账号
    pub async fn delete_teacher_impl(&self, id: i64) -> Result<bool> {
        let Some(teacher) = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询教师失败"))?
        else {
            return Ok(false);
        };

        let txn = self.db.begin().await.map_err(db_error("开启事务失败"))?;
        let result = Teachers::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_error("删除教师失败"))?;
        if let Some(user_id) = teacher.user_id {
            Users::delete_by_id(user_id)
                .exec(&txn)
                .await
                .map_err(db_error("删除教师账号失败"))?;
        }
        txn.commit().await.map_err(db_error("提交事务失败"))?;

        Ok(result.rows_affected > 0)
    }
}
