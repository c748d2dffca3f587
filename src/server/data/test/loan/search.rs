use super::*;

/// Tests that an absent term returns the whole catalog.
///
/// Expected: Ok with every loan in insertion order
#[tokio::test]
async fn no_term_returns_everything() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Loan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let home = factory::loan::create_loan_with_title(db, "Home Equity", "Mortgage").await?;
    let auto = factory::loan::create_loan_with_title(db, "Auto Loan", "Vehicle").await?;

    let repo = LoanRepository::new(db);
    let loans = repo.search(None).await?;

    let ids: Vec<i32> = loans.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![home.id, auto.id]);

    Ok(())
}

/// Tests case-insensitive matching on the title.
///
/// Expected: "home" matches only "Home Equity"; "loan" matches only "Auto Loan"
#[tokio::test]
async fn matches_title_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Loan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::loan::create_loan_with_title(db, "Home Equity", "Mortgage").await?;
    factory::loan::create_loan_with_title(db, "Auto Loan", "Vehicle").await?;

    let repo = LoanRepository::new(db);

    let home = repo.search(Some("home")).await?;
    assert_eq!(home.len(), 1);
    assert_eq!(home[0].title, "Home Equity");

    let loan = repo.search(Some("LOAN")).await?;
    assert_eq!(loan.len(), 1);
    assert_eq!(loan[0].title, "Auto Loan");

    Ok(())
}

/// Tests that the term is also matched against the category.
///
/// Expected: Ok with the loan whose category contains the term
#[tokio::test]
async fn matches_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Loan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::loan::create_loan_with_title(db, "Home Equity", "Mortgage").await?;
    factory::loan::create_loan_with_title(db, "Auto Loan", "Vehicle").await?;

    let repo = LoanRepository::new(db);
    let loans = repo.search(Some("vehic")).await?;

    assert_eq!(loans.len(), 1);
    assert_eq!(loans[0].category, "Vehicle");

    Ok(())
}

/// Tests that LIKE wildcards in the term are matched literally.
///
/// Expected: "%" matches only the loan with a literal percent sign
#[tokio::test]
async fn wildcards_are_literal() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Loan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::loan::create_loan_with_title(db, "0% Intro Rate", "Personal").await?;
    factory::loan::create_loan_with_title(db, "Auto Loan", "Vehicle").await?;

    let repo = LoanRepository::new(db);

    let percent = repo.search(Some("%")).await?;
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].title, "0% Intro Rate");

    assert!(repo.search(Some("_")).await?.is_empty());

    Ok(())
}

/// Tests a term that matches nothing.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn no_match_returns_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Loan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_loan(db).await?;

    let repo = LoanRepository::new(db);

    assert!(repo.search(Some("yacht")).await?.is_empty());

    Ok(())
}

/// Tests case-insensitive matching on titles and categories with non-ASCII capitals.
///
/// Expected: lower, upper and exact spellings of the term all find the loan
#[tokio::test]
async fn matches_non_ascii_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Loan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::loan::create_loan_with_title(db, "École Loan", "Éducation").await?;
    factory::loan::create_loan_with_title(db, "Auto Loan", "Vehicle").await?;

    let repo = LoanRepository::new(db);

    for term in ["école", "ÉCOLE", "École"] {
        let loans = repo.search(Some(term)).await?;
        assert_eq!(loans.len(), 1, "term {term}");
        assert_eq!(loans[0].title, "École Loan");
    }

    let loans = repo.search(Some("ÉDUC")).await?;
    assert_eq!(loans.len(), 1);
    assert_eq!(loans[0].category, "Éducation");

    Ok(())
}

/// Tests that a renamed loan is found by its new title only.
///
/// Expected: search follows the title written by the update
#[tokio::test]
async fn search_follows_updated_title() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Loan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = factory::loan::create_loan_with_title(db, "Auto Loan", "Vehicle").await?;

    let repo = LoanRepository::new(db);
    repo.update(
        seeded.id,
        UpdateLoanParam {
            title: Some("Öko Kredit".to_string()),
            ..Default::default()
        },
    )
    .await?;

    assert!(repo.search(Some("auto")).await?.is_empty());
    assert_eq!(repo.search(Some("öko")).await?.len(), 1);

    Ok(())
}

/// Tests a term present in one loan's title and another loan's category.
///
/// Expected: "loan" returns both "Home Equity" (category "Home Loan") and "Auto Loan"
#[tokio::test]
async fn matches_title_or_category_across_loans() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Loan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::loan::create_loan_with_title(db, "Home Equity", "Home Loan").await?;
    factory::loan::create_loan_with_title(db, "Auto Loan", "Vehicle").await?;

    let repo = LoanRepository::new(db);
    let titles: Vec<String> = repo
        .search(Some("loan"))
        .await?
        .into_iter()
        .map(|loan| loan.title)
        .collect();

    assert_eq!(titles, vec!["Home Equity", "Auto Loan"]);

    Ok(())
}
