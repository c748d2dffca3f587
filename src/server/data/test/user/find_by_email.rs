use super::*;

/// Tests looking up an existing user by email.
///
/// Expected: Ok(Some) with the stored role
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_role(db, "m@x.com", UserRole::Manager).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("m@x.com").await?;

    assert!(user.is_some());
    assert_eq!(user.unwrap().role, UserRole::Manager);

    Ok(())
}

/// Tests that the lookup is an exact match.
///
/// Expected: Ok(None) for a different-case email
#[tokio::test]
async fn email_match_is_exact() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_role(db, "m@x.com", UserRole::Manager).await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_email("M@X.COM").await?.is_none());
    assert!(repo.find_by_email("nobody@x.com").await?.is_none());

    Ok(())
}
