use super::{SeaOrmStorage, db_error};
use crate::entity::schedule_entries::{ActiveModel, Column, Entity as ScheduleEntries, Model};
use crate::errors::Result;
use crate::models::schedules::{
    entities::ScheduleEntry,
    requests::{CreateScheduleRequest, UpdateScheduleRequest},
};
use crate::storage::SchoolFilter;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

async fn insert_schedule<C: ConnectionTrait>(
    conn: &C,
    school_id: i64,
    req: CreateScheduleRequest,
) -> Result<Model> {
    let now = chrono::Utc::now().timestamp();

    let model = ActiveModel {
        school_id: Set(school_id),
        room_id: Set(req.room_id),
        teacher_id: Set(req.teacher_id),
        subject: Set(req.subject.trim().to_string()),
        day: Set(req.day.to_string()),
        start_time: Set(req.start_time),
        end_time: Set(req.end_time),
        academic_year: Set(req.academic_year.trim().to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    model.insert(conn).await.map_err(db_error("创建课表条目失败"))
}

impl SeaOrmStorage {
    pub async fn create_schedule_impl(
        &self,
        school_id: i64,
        req: CreateScheduleRequest,
    ) -> Result<ScheduleEntry> {
        let model = insert_schedule(&self.db, school_id, req).await?;
        Ok(model.into_schedule_entry())
    }

    /// 全部成功才提交；出错时事务随 `txn` 析构回滚
    pub async fn create_schedules_atomic_impl(
        &self,
        school_id: i64,
        entries: Vec<CreateScheduleRequest>,
    ) -> Result<Vec<ScheduleEntry>> {
        let txn = self.db.begin().await.map_err(db_error("开启事务失败"))?;

        let mut created = Vec::with_capacity(entries.len());
        for req in entries {
            let model = insert_schedule(&txn, school_id, req).await?;
            created.push(model.into_schedule_entry());
        }

        txn.commit().await.map_err(db_error("提交事务失败"))?;
        Ok(created)
    }

    pub async fn get_schedule_by_id_impl(&self, id: i64) -> Result<Option<ScheduleEntry>> {
        let result = ScheduleEntries::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询课表条目失败"))?;

        Ok(result.map(|m| m.into_schedule_entry()))
    }

    pub async fn list_schedules_impl(&self, school: SchoolFilter) -> Result<Vec<ScheduleEntry>> {
        let mut select = ScheduleEntries::find();
        if let Some(school_id) = school {
            select = select.filter(Column::SchoolId.eq(school_id));
        }

        let entries = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询课表失败"))?;

        let mut entries: Vec<ScheduleEntry> =
            entries.into_iter().map(|m| m.into_schedule_entry()).collect();
        // 星期按周序而非字母序排列
        entries.sort_by(|a, b| {
            (a.day.ordinal(), &a.start_time).cmp(&(b.day.ordinal(), &b.start_time))
        });
        Ok(entries)
    }

    pub async fn update_schedule_impl(
        &self,
        id: i64,
        update: UpdateScheduleRequest,
    ) -> Result<Option<ScheduleEntry>> {
        if self.get_schedule_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(room_id) = update.room_id {
            model.room_id = Set(room_id);
        }
        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(teacher_id);
        }
        if let Some(subject) = update.subject {
            model.subject = Set(subject.trim().to_string());
        }
        if let Some(day) = update.day {
            model.day = Set(day.to_string());
        }
        if let Some(start_time) = update.start_time {
            model.start_time = Set(start_time);
        }
        if let Some(end_time) = update.end_time {
            model.end_time = Set(end_time);
        }
        if let Some(year) = update.academic_year {
            model.academic_year = Set(year.trim().to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(db_error("更新课表条目失败"))?;

        self.get_schedule_by_id_impl(id).await
    }

    pub async fn delete_schedule_impl(&self, id: i64) -> Result<bool> {
        let result = ScheduleEntries::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除课表条目失败"))?;

        Ok(result.rows_affected > 0)
    }
}
