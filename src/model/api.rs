use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Summary returned after inserting one document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertOneResultDto {
    pub acknowledged: bool,
    pub inserted_id: i32,
}

impl InsertOneResultDto {
    pub fn new(inserted_id: i32) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

/// Summary returned after updating documents by filter.
///
/// `modified_count` of zero with `matched_count` of one reports a no-op update.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResultDto {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    pub upserted_id: Option<i32>,
}

impl UpdateResultDto {
    /// Summary for a single matched document.
    pub fn matched_one(modified: bool) -> Self {
        Self {
            acknowledged: true,
            matched_count: 1,
            modified_count: u64::from(modified),
            upserted_count: 0,
            upserted_id: None,
        }
    }
}

/// Summary returned after deleting documents by filter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResultDto {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteResultDto {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}
