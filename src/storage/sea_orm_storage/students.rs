use super::{SeaOrmStorage, db_error};
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::Result;
use crate::models::students::{
    entities::{Student, StudentStatus},
    requests::{CreateStudentRequest, UpdateStudentRequest},
};
use crate::storage::SchoolFilter;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

/// 空字符串视为未填写
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl SeaOrmStorage {
    pub async fn create_student_impl(
        &self,
        school_id: i64,
        req: CreateStudentRequest,
    ) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            school_id: Set(school_id),
            matricule: Set(req.matricule.trim().to_string()),
            nom: Set(req.nom.trim().to_string()),
            prenom: Set(req.prenom.trim().to_string()),
            email: Set(non_empty(req.email)),
            telephone: Set(non_empty(req.telephone)),
            filiere: Set(req.filiere.trim().to_string()),
            niveau: Set(req.niveau.trim().to_string()),
            room_id: Set(req.room_id),
            status: Set(req.status.unwrap_or(StudentStatus::Active).to_string()),
            date_naissance: Set(non_empty(req.date_naissance)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建学生失败"))?;

        Ok(result.into_student())
    }

    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询学生失败"))?;

        Ok(result.map(|m| m.into_student()))
    }

    pub async fn list_students_impl(&self, school: SchoolFilter) -> Result<Vec<Student>> {
        let mut select = Students::find();
        if let Some(school_id) = school {
            select = select.filter(Column::SchoolId.eq(school_id));
        }

        let students = select
            .order_by_asc(Column::Nom)
            .order_by_asc(Column::Prenom)
            .all(&self.db)
            .await
            .map_err(db_error("查询学生列表失败"))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        if self.get_student_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(matricule) = update.matricule {
            model.matricule = Set(matricule.trim().to_string());
        }
        if let Some(nom) = update.nom {
            model.nom = Set(nom.trim().to_string());
        }
        if let Some(prenom) = update.prenom {
            model.prenom = Set(prenom.trim().to_string());
        }
        if update.email.is_some() {
            model.email = Set(non_empty(update.email));
        }
        if update.telephone.is_some() {
            model.telephone = Set(non_empty(update.telephone));
        }
        if let Some(filiere) = update.filiere {
            model.filiere = Set(filiere.trim().to_string());
        }
        if let Some(niveau) = update.niveau {
            model.niveau = Set(niveau.trim().to_string());
        }
        if let Some(room_id) = update.room_id {
            model.room_id = Set(Some(room_id));
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        if update.date_naissance.is_some() {
            model.date_naissance = Set(non_empty(update.date_naissance));
        }

        model
            .update(&self.db)
            .await
            .map_err(db_error("更新学生失败"))?;

        self.get_student_by_id_impl(id).await
    }

    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除学生失败"))?;

        Ok(result.rows_affected > 0)
    }
}
