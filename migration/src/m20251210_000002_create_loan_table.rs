use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Loan::Table)
                    .if_not_exists()
                    .col(pk_auto(Loan::Id))
                    .col(string(Loan::Title))
                    .col(string(Loan::TitleSearch))
                    .col(string(Loan::Category))
                    .col(string(Loan::CategorySearch))
                    .col(text_null(Loan::Description))
                    .col(double_null(Loan::InterestRate))
                    .col(double_null(Loan::MaxLoanLimit))
                    .col(json(Loan::Details))
                    .col(timestamp_with_time_zone(Loan::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Loan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Loan {
    Table,
    Id,
    Title,
    TitleSearch,
    Category,
    CategorySearch,
    Description,
    InterestRate,
    MaxLoanLimit,
    Details,
    CreatedAt,
}
