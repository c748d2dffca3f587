use super::*;

/// Tests that only pending applications are returned.
///
/// Expected: Ok with the single pending application
#[tokio::test]
async fn returns_only_pending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LoanApplication)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pending = factory::create_loan_application(db, "a@x.com").await?;
    factory::loan_application::LoanApplicationFactory::new(db)
        .status(ApplicationStatus::Approved)
        .build()
        .await?;
    factory::loan_application::LoanApplicationFactory::new(db)
        .status(ApplicationStatus::Rejected)
        .build()
        .await?;

    let repo = LoanApplicationRepository::new(db);
    let applications = repo.get_pending().await?;

    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].id, pending.id);
    assert_eq!(applications[0].status, ApplicationStatus::Pending);

    Ok(())
}
