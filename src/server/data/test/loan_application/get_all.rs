use super::*;

/// Tests that applications are listed most recent first.
///
/// Expected: Ok with application dates in non-increasing order
#[tokio::test]
async fn orders_by_application_date_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LoanApplication)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let old = factory::loan_application::LoanApplicationFactory::new(db)
        .application_date(now - Duration::days(2))
        .build()
        .await?;
    let newest = factory::loan_application::LoanApplicationFactory::new(db)
        .application_date(now)
        .build()
        .await?;
    let middle = factory::loan_application::LoanApplicationFactory::new(db)
        .application_date(now - Duration::days(1))
        .build()
        .await?;

    let repo = LoanApplicationRepository::new(db);
    let applications = repo.get_all().await?;

    let ids: Vec<i32> = applications.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, old.id]);
    assert!(applications
        .windows(2)
        .all(|pair| pair[0].application_date >= pair[1].application_date));

    Ok(())
}

/// Tests that applications sharing a date are ordered newest ID first.
///
/// Expected: Ok with the later insert first
#[tokio::test]
async fn ties_are_broken_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LoanApplication)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = Utc::now();
    let first = factory::loan_application::LoanApplicationFactory::new(db)
        .application_date(date)
        .build()
        .await?;
    let second = factory::loan_application::LoanApplicationFactory::new(db)
        .application_date(date)
        .build()
        .await?;

    let repo = LoanApplicationRepository::new(db);
    let ids: Vec<i32> = repo.get_all().await?.iter().map(|a| a.id).collect();

    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}
