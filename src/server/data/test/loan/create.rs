use super::*;

/// Tests inserting a catalog entry.
///
/// Expected: Ok with an ID that reads back the same fields
#[tokio::test]
async fn creates_loan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Loan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LoanRepository::new(db);
    let id = repo
        .create(CreateLoanParam {
            title: "Auto Loan".to_string(),
            category: "Vehicle".to_string(),
            description: Some("New and used cars".to_string()),
            interest_rate: Some(7.25),
            max_loan_limit: Some(40000.0),
            details: json!({"requiredDocuments": ["ID", "Payslip"]}),
        })
        .await?;

    let loan = repo.get_by_id(id).await?.unwrap();
    assert_eq!(loan.title, "Auto Loan");
    assert_eq!(loan.interest_rate, Some(7.25));
    assert_eq!(
        loan.details.get("requiredDocuments"),
        Some(&json!(["ID", "Payslip"]))
    );

    Ok(())
}
