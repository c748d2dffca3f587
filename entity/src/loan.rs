use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "loan")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    /// Lower-cased copy of `title` matched by catalog search.
    pub title_search: String,
    pub category: String,
    pub category_search: String,
    pub description: Option<String>,
    pub interest_rate: Option<f64>,
    pub max_loan_limit: Option<f64>,
    pub details: Json,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
