//! Loan catalog repository.
//!
//! Provides catalog search and single-document mutations by identifier. Search matches a
//! term case-insensitively anywhere in a loan's title or category. Both sides are
//! lower-cased in Rust: every write refreshes the `*_search` columns and the term is
//! folded the same way, so non-ASCII letters compare like ASCII ones.

use crate::server::model::loan::{CreateLoanParam, Loan, LoanChange, UpdateLoanParam};
use chrono::Utc;
use sea_orm::{
    sea_query::{Condition, Expr, LikeExpr},
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

/// Escape character used when turning a search term into a LIKE pattern.
const LIKE_ESCAPE: char = '\\';

/// Folds a title or category into the form stored in its search column.
fn search_key(value: &str) -> String {
    value.to_lowercase()
}

/// Builds an unanchored, lower-cased LIKE pattern with wildcards in `term` escaped.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in search_key(term).chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');

    pattern
}

pub struct LoanRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LoanRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches the catalog.
    ///
    /// # Arguments
    /// - `term`: `None` returns every loan; otherwise loans whose title or category
    ///   contains the term, ignoring case
    ///
    /// # Returns
    /// - `Ok(Vec<Loan>)`: Matching loans in insertion order (possibly empty)
    /// - `Err(DbErr)`: Database error
    pub async fn search(&self, term: Option<&str>) -> Result<Vec<Loan>, DbErr> {
        let mut query = entity::prelude::Loan::find();

        if let Some(term) = term {
            let pattern = contains_pattern(term);
            let title = Expr::col(entity::loan::Column::TitleSearch)
                .like(LikeExpr::new(pattern.clone()).escape(LIKE_ESCAPE));
            let category = Expr::col(entity::loan::Column::CategorySearch)
                .like(LikeExpr::new(pattern).escape(LIKE_ESCAPE));

            query = query.filter(Condition::any().add(title).add(category));
        }

        let entities = query
            .order_by_asc(entity::loan::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Loan::from_entity).collect())
    }

    /// Gets a loan by ID
    ///
    /// # Returns
    /// - `Ok(Some(Loan))`: Loan found
    /// - `Ok(None)`: No loan with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Loan>, DbErr> {
        let entity = entity::prelude::Loan::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Loan::from_entity))
    }

    /// Inserts a new catalog entry
    ///
    /// # Returns
    /// - `Ok(i32)`: ID assigned by the store
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, param: CreateLoanParam) -> Result<i32, DbErr> {
        let result = entity::prelude::Loan::insert(entity::loan::ActiveModel {
            title_search: ActiveValue::Set(search_key(&param.title)),
            title: ActiveValue::Set(param.title),
            category_search: ActiveValue::Set(search_key(&param.category)),
            category: ActiveValue::Set(param.category),
            description: ActiveValue::Set(param.description),
            interest_rate: ActiveValue::Set(param.interest_rate),
            max_loan_limit: ActiveValue::Set(param.max_loan_limit),
            details: ActiveValue::Set(param.details),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec(self.db)
        .await?;

        Ok(result.last_insert_id)
    }

    /// Applies a partial update to a loan
    ///
    /// The row is only written when the patch changes at least one value.
    ///
    /// # Returns
    /// - `Ok(Some(LoanChange::Updated))`: Loan found and changed
    /// - `Ok(Some(LoanChange::Unchanged))`: Loan found, patch matched stored values
    /// - `Ok(None)`: No loan with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn update(
        &self,
        id: i32,
        param: UpdateLoanParam,
    ) -> Result<Option<LoanChange>, DbErr> {
        let Some(stored) = entity::prelude::Loan::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let patched = param.apply_to(stored.clone());
        if patched == stored {
            return Ok(Some(LoanChange::Unchanged));
        }

        entity::loan::ActiveModel {
            id: ActiveValue::Unchanged(id),
            title_search: ActiveValue::Set(search_key(&patched.title)),
            title: ActiveValue::Set(patched.title),
            category_search: ActiveValue::Set(search_key(&patched.category)),
            category: ActiveValue::Set(patched.category),
            description: ActiveValue::Set(patched.description),
            interest_rate: ActiveValue::Set(patched.interest_rate),
            max_loan_limit: ActiveValue::Set(patched.max_loan_limit),
            details: ActiveValue::Set(patched.details),
            created_at: ActiveValue::Unchanged(patched.created_at),
        }
        .update(self.db)
        .await?;

        Ok(Some(LoanChange::Updated))
    }

    /// Deletes a loan by ID
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of deleted rows (0 when no loan had that ID)
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Loan::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
