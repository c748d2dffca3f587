use super::*;

/// Tests submitting an application.
///
/// Verifies that status, fee status and date are assigned by the repository and
/// the free-form fields are stored alongside the typed ones.
///
/// Expected: Ok with a pending, unpaid application dated now
#[tokio::test]
async fn creates_pending_unpaid_application() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LoanApplication)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let before = Utc::now();
    let repo = LoanApplicationRepository::new(db);
    let id = repo
        .create(ApplyLoanParam {
            user_email: "a@x.com".to_string(),
            loan_title: "Auto Loan".to_string(),
            loan_amount: 500.0,
            category: "Vehicle".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            details: json!({"contactNumber": "555-0100"}),
        })
        .await?;

    let application = repo.get_by_id(id).await?.unwrap();
    assert_eq!(application.status, ApplicationStatus::Pending);
    assert_eq!(
        application.application_fee_status,
        ApplicationFeeStatus::Unpaid
    );
    assert_eq!(application.loan_amount, 500.0);
    assert!(application.application_date >= before);
    assert_eq!(
        application.details.get("contactNumber"),
        Some(&json!("555-0100"))
    );

    Ok(())
}
