use super::{SeaOrmStorage, db_error};
use crate::entity::payments::{ActiveModel, Column, Entity as Payments};
use crate::errors::Result;
use crate::models::payments::{
    entities::{Payment, PaymentStatus},
    requests::{CreatePaymentRequest, UpdatePaymentRequest},
};
use crate::storage::SchoolFilter;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_payment_impl(
        &self,
        school_id: i64,
        req: CreatePaymentRequest,
        receipt_number: String,
    ) -> Result<Payment> {
        let now = chrono::Utc::now();

        let model = ActiveModel {
            school_id: Set(school_id),
            student_id: Set(req.student_id),
            amount: Set(req.amount),
            payment_type: Set(req.payment_type.to_string()),
            method: Set(req.method.to_string()),
            status: Set(req.status.unwrap_or(PaymentStatus::Paid).to_string()),
            receipt_number: Set(receipt_number),
            paid_at: Set(req.paid_at.unwrap_or(now).timestamp()),
            note: Set(req.note),
            created_at: Set(now.timestamp()),
            updated_at: Set(now.timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建缴费记录失败"))?;

        Ok(result.into_payment())
    }

    pub async fn get_payment_by_id_impl(&self, id: i64) -> Result<Option<Payment>> {
        let result = Payments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询缴费记录失败"))?;

        Ok(result.map(|m| m.into_payment()))
    }

    pub async fn list_payments_impl(&self, school: SchoolFilter) -> Result<Vec<Payment>> {
        let mut select = Payments::find();
        if let Some(school_id) = school {
            select = select.filter(Column::SchoolId.eq(school_id));
        }

        let payments = select
            .order_by_desc(Column::PaidAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询缴费列表失败"))?;

        Ok(payments.into_iter().map(|m| m.into_payment()).collect())
    }

    pub async fn update_payment_impl(
        &self,
        id: i64,
        update: UpdatePaymentRequest,
    ) -> Result<Option<Payment>> {
        if self.get_payment_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        // 收据号创建后不可修改
        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(amount) = update.amount {
            model.amount = Set(amount);
        }
        if let Some(payment_type) = update.payment_type {
            model.payment_type = Set(payment_type.to_string());
        }
        if let Some(method) = update.method {
            model.method = Set(method.to_string());
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        if let Some(paid_at) = update.paid_at {
            model.paid_at = Set(paid_at.timestamp());
        }
        if let Some(note) = update.note {
            model.note = Set(Some(note));
        }

        model
            .update(&self.db)
            .await
            .map_err(db_error("更新缴费记录失败"))?;

        self.get_payment_by_id_impl(id).await
    }

    pub async fn delete_payment_impl(&self, id: i64) -> Result<bool> {
        let result = Payments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除缴费记录失败"))?;

        Ok(result.rows_affected > 0)
    }
}
