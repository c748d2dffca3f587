use super::*;

/// Tests cancelling an application.
///
/// Expected: Ok(1) and the application gone
#[tokio::test]
async fn deletes_application() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LoanApplication)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let application = factory::create_loan_application(db, "a@x.com").await?;

    let repo = LoanApplicationRepository::new(db);

    assert_eq!(repo.delete(application.id).await?, 1);
    assert!(repo.get_by_id(application.id).await?.is_none());

    Ok(())
}

/// Tests cancelling an ID that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn missing_application_deletes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LoanApplication)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LoanApplicationRepository::new(db);

    assert_eq!(repo.delete(99).await?, 0);

    Ok(())
}
