use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LoanApplication::Table)
                    .if_not_exists()
                    .col(pk_auto(LoanApplication::Id))
                    .col(string(LoanApplication::UserEmail))
                    .col(string(LoanApplication::LoanTitle))
                    .col(double(LoanApplication::LoanAmount))
                    .col(string(LoanApplication::Category))
                    .col(string(LoanApplication::FirstName))
                    .col(string(LoanApplication::LastName))
                    .col(string(LoanApplication::Status))
                    .col(string(LoanApplication::ApplicationFeeStatus))
                    .col(json(LoanApplication::Details))
                    .col(timestamp_with_time_zone(LoanApplication::ApplicationDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_loan_application_user_email")
                    .table(LoanApplication::Table)
                    .col(LoanApplication::UserEmail)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_loan_application_status")
                    .table(LoanApplication::Table)
                    .col(LoanApplication::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LoanApplication::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LoanApplication {
    Table,
    Id,
    UserEmail,
    LoanTitle,
    LoanAmount,
    Category,
    FirstName,
    LastName,
    Status,
    ApplicationFeeStatus,
    Details,
    ApplicationDate,
}
