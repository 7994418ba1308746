//! 缴费实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub school_id: i64,
    pub student_id: i64,
    pub amount: i64,
    pub payment_type: String,
    pub method: String,
    pub status: String,
    #[sea_orm(unique)]
    pub receipt_number: String,
    pub paid_at: i64,
    pub note: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_payment(self) -> crate::models::payments::entities::Payment {
        use crate::models::payments::entities::{
            Payment, PaymentMethod, PaymentStatus, PaymentType,
        };

        Payment {
            id: self.id,
            school_id: self.school_id,
            student_id: self.student_id,
            amount: self.amount,
            payment_type: self.payment_type.parse().unwrap_or(PaymentType::Other),
            method: self.method.parse().unwrap_or(PaymentMethod::Cash),
            status: self.status.parse().unwrap_or(PaymentStatus::Pending),
            receipt_number: self.receipt_number,
            paid_at: super::ts(self.paid_at),
            note: self.note,
            created_at: super::ts(self.created_at),
            updated_at: super::ts(self.updated_at),
        }
    }
}
