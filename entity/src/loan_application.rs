use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{ApplicationFeeStatus, ApplicationStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "loan_application")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_email: String,
    pub loan_title: String,
    pub loan_amount: f64,
    pub category: String,
    pub first_name: String,
    pub last_name: String,
    pub status: ApplicationStatus,
    pub application_fee_status: ApplicationFeeStatus,
    pub details: Json,
    pub application_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
