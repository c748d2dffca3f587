//! Loan application repository.
//!
//! Inserts applications with server-assigned status fields and answers the listing
//! queries used by borrowers (own applications) and staff (all, pending).

use crate::server::model::loan_application::{
    ApplicationFeeStatus, ApplicationStatus, ApplyLoanParam, LoanApplication,
};
use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

pub struct LoanApplicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LoanApplicationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new application
    ///
    /// `status`, `application_fee_status` and `application_date` are always assigned
    /// here (pending, unpaid, now); the parameter type has no way to carry them.
    ///
    /// # Returns
    /// - `Ok(i32)`: ID assigned by the store
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, param: ApplyLoanParam) -> Result<i32, DbErr> {
        let result = entity::prelude::LoanApplication::insert(
            entity::loan_application::ActiveModel {
                user_email: ActiveValue::Set(param.user_email),
                loan_title: ActiveValue::Set(param.loan_title),
                loan_amount: ActiveValue::Set(param.loan_amount),
                category: ActiveValue::Set(param.category),
                first_name: ActiveValue::Set(param.first_name),
                last_name: ActiveValue::Set(param.last_name),
                status: ActiveValue::Set(ApplicationStatus::Pending),
                application_fee_status: ActiveValue::Set(ApplicationFeeStatus::Unpaid),
                details: ActiveValue::Set(param.details),
                application_date: ActiveValue::Set(Utc::now()),
                ..Default::default()
            },
        )
        .exec(self.db)
        .await?;

        Ok(result.last_insert_id)
    }

    /// Gets an application by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<LoanApplication>, DbErr> {
        let entity = entity::prelude::LoanApplication::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(LoanApplication::from_entity))
    }

    /// Gets every application, most recent `application_date` first
    ///
    /// Applications submitted at the same instant are ordered newest ID first.
    pub async fn get_all(&self) -> Result<Vec<LoanApplication>, DbErr> {
        let entities = entity::prelude::LoanApplication::find()
            .order_by_desc(entity::loan_application::Column::ApplicationDate)
            .order_by_desc(entity::loan_application::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(LoanApplication::from_entity)
            .collect())
    }

    /// Gets every application whose applicant email equals `email` exactly
    pub async fn get_by_user_email(&self, email: &str) -> Result<Vec<LoanApplication>, DbErr> {
        let entities = entity::prelude::LoanApplication::find()
            .filter(entity::loan_application::Column::UserEmail.eq(email))
            .order_by_asc(entity::loan_application::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(LoanApplication::from_entity)
            .collect())
    }

    /// Gets every application still awaiting review
    pub async fn get_pending(&self) -> Result<Vec<LoanApplication>, DbErr> {
        let entities = entity::prelude::LoanApplication::find()
            .filter(entity::loan_application::Column::Status.eq(ApplicationStatus::Pending))
            .order_by_asc(entity::loan_application::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(LoanApplication::from_entity)
            .collect())
    }

    /// Deletes an application by ID
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of deleted rows (0 when no application had that ID)
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::LoanApplication::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
