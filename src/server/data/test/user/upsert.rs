use super::*;

/// Tests creating a user on first login.
///
/// Verifies that an unknown email is inserted with the default role, the provided
/// profile fields, and both timestamps set to the same instant.
///
/// Expected: Ok(Inserted) with one stored user
#[tokio::test]
async fn creates_user_on_first_login() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let outcome = repo
        .upsert(login("a@x.com", None), UserRole::Borrower)
        .await?;

    assert!(matches!(outcome, UpsertUserOutcome::Inserted { .. }));

    let user = repo.find_by_email("a@x.com").await?.unwrap();
    assert_eq!(user.role, UserRole::Borrower);
    assert_eq!(user.profile.get("name"), Some(&json!("Test User")));
    assert_eq!(user.created_at, user.last_logged_in);

    Ok(())
}

/// Tests that the caller-supplied role wins over the default at creation.
///
/// Expected: Ok with the user stored as manager
#[tokio::test]
async fn applies_requested_role_on_creation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.upsert(login("m@x.com", Some(UserRole::Manager)), UserRole::Borrower)
        .await?;

    let user = repo.find_by_email("m@x.com").await?.unwrap();
    assert_eq!(user.role, UserRole::Manager);

    Ok(())
}

/// Tests that the configured default role is used when none is requested.
///
/// Expected: Ok with the user stored as customer
#[tokio::test]
async fn uses_configured_default_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.upsert(login("c@x.com", None), UserRole::Customer)
        .await?;

    let user = repo.find_by_email("c@x.com").await?.unwrap();
    assert_eq!(user.role, UserRole::Customer);

    Ok(())
}

/// Tests that repeated logins never create a second user.
///
/// Verifies that the second upsert only advances `last_logged_in`, leaving the role,
/// profile and creation time from the first login untouched even when the second
/// payload asks for another role.
///
/// Expected: Ok(Matched) with exactly one stored user
#[tokio::test]
async fn second_login_only_touches_last_login() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.upsert(login("a@x.com", None), UserRole::Borrower)
        .await?;
    let first = repo.find_by_email("a@x.com").await?.unwrap();

    let outcome = repo
        .upsert(
            UpsertUserParam {
                email: "a@x.com".to_string(),
                role: Some(UserRole::Admin),
                profile: json!({"name": "Someone Else"}),
            },
            UserRole::Borrower,
        )
        .await?;

    assert_eq!(outcome, UpsertUserOutcome::Matched { modified: true });

    let second = repo.find_by_email("a@x.com").await?.unwrap();
    assert_eq!(second.id, first.id);
    assert_eq!(second.role, UserRole::Borrower);
    assert_eq!(second.profile, first.profile);
    assert_eq!(second.created_at, first.created_at);
    assert!(second.last_logged_in >= first.last_logged_in);

    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that an upsert against a user seeded outside the login flow matches it.
///
/// Expected: Ok(Matched) and role preserved
#[tokio::test]
async fn matches_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_role(db, "admin@x.com", UserRole::Admin).await?;

    let repo = UserRepository::new(db);
    let outcome = repo
        .upsert(login("admin@x.com", None), UserRole::Borrower)
        .await?;

    assert!(matches!(outcome, UpsertUserOutcome::Matched { .. }));
    let user = repo.find_by_email("admin@x.com").await?.unwrap();
    assert_eq!(user.role, UserRole::Admin);

    Ok(())
}

/// Tests that upsert fails cleanly when the table does not exist.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_without_user_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .upsert(login("a@x.com", None), UserRole::Borrower)
        .await;

    assert!(result.is_err());

    Ok(())
}
