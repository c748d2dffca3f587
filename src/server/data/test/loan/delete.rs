use super::*;

/// Tests deleting an existing loan.
///
/// Expected: Ok(1) and the loan gone
#[tokio::test]
async fn deletes_loan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Loan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = factory::create_loan(db).await?;
    let kept = factory::create_loan(db).await?;

    let repo = LoanRepository::new(db);
    let deleted = repo.delete(seeded.id).await?;

    assert_eq!(deleted, 1);
    assert!(repo.get_by_id(seeded.id).await?.is_none());
    assert!(repo.get_by_id(kept.id).await?.is_some());

    Ok(())
}

/// Tests deleting an ID that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn missing_loan_deletes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Loan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LoanRepository::new(db);

    assert_eq!(repo.delete(12).await?, 0);

    Ok(())
}
