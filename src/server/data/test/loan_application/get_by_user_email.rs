use super::*;

/// Tests filtering applications by applicant email.
///
/// Expected: Ok with only the applicant's own applications
#[tokio::test]
async fn returns_only_matching_applicant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LoanApplication)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_loan_application(db, "a@x.com").await?;
    factory::create_loan_application(db, "b@x.com").await?;
    factory::create_loan_application(db, "a@x.com").await?;

    let repo = LoanApplicationRepository::new(db);
    let applications = repo.get_by_user_email("a@x.com").await?;

    assert_eq!(applications.len(), 2);
    assert!(applications.iter().all(|a| a.user_email == "a@x.com"));

    Ok(())
}

/// Tests an applicant with no applications.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn unknown_applicant_returns_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LoanApplication)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_loan_application(db, "a@x.com").await?;

    let repo = LoanApplicationRepository::new(db);

    assert!(repo.get_by_user_email("nobody@x.com").await?.is_empty());

    Ok(())
}
