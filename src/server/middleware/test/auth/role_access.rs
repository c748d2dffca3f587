use super::*;

async fn role_state() -> crate::server::state::AppState {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    test_state_with(
        test.into_database().await.unwrap(),
        Arc::new(RoleAccess),
        Arc::new(FakeGateway::default()),
    )
}

/// Tests admin user successfully passes admin permission check.
///
/// Expected: Ok(())
#[tokio::test]
async fn grants_admin_to_admin_user() -> Result<(), AppError> {
    let state = role_state().await;
    let db = state.store.connection().await?;
    factory::user::create_user_with_role(db, "admin@x.com", UserRole::Admin).await?;

    let headers = caller("admin@x.com");
    AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    Ok(())
}

/// Tests non-admin user is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied) naming the caller
#[tokio::test]
async fn denies_admin_to_borrower() -> Result<(), AppError> {
    let state = role_state().await;
    let db = state.store.connection().await?;
    factory::user::create_user_with_role(db, "b@x.com", UserRole::Borrower).await?;

    let headers = caller("b@x.com");
    let result = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(email, message))) => {
            assert_eq!(email, "b@x.com");
            assert!(message.contains("admin"));
        }
        other => panic!("expected AccessDenied, got {:?}", other),
    }

    Ok(())
}

/// Tests that managers count as staff but not as admins.
///
/// Expected: Ok for Staff, Err for Admin
#[tokio::test]
async fn manager_is_staff_but_not_admin() -> Result<(), AppError> {
    let state = role_state().await;
    let db = state.store.connection().await?;
    factory::user::create_user_with_role(db, "m@x.com", UserRole::Manager).await?;

    let headers = caller("m@x.com");
    let guard = AuthGuard::new(&state, &headers);

    guard.require(&[Permission::Staff]).await?;
    assert!(guard.require(&[Permission::Admin]).await.is_err());

    Ok(())
}

/// Tests that a request without the caller header is rejected.
///
/// Expected: Err(AuthError::MissingIdentity)
#[tokio::test]
async fn requires_caller_header() -> Result<(), AppError> {
    let state = role_state().await;
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&state, &headers)
        .require(&[Permission::Staff])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingIdentity))
    ));

    Ok(())
}

/// Tests that an unknown caller is rejected.
///
/// Expected: Err(AuthError::UnknownUser)
#[tokio::test]
async fn rejects_unknown_caller() -> Result<(), AppError> {
    let state = role_state().await;
    let headers = caller("ghost@x.com");

    let result = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UnknownUser(_)))
    ));

    Ok(())
}

/// Tests that operations without permissions need no caller.
///
/// Expected: Ok(())
#[tokio::test]
async fn empty_permission_list_is_public() -> Result<(), AppError> {
    let state = role_state().await;
    let headers = HeaderMap::new();

    AuthGuard::new(&state, &headers).require(&[]).await?;

    Ok(())
}

/// Tests that applicants may cancel only their own applications.
///
/// Expected: Ok for the owner, Err for another borrower, Ok for an admin
#[tokio::test]
async fn application_owner_or_admin() -> Result<(), AppError> {
    let state = role_state().await;
    let db = state.store.connection().await?;
    factory::user::create_user_with_role(db, "owner@x.com", UserRole::Borrower).await?;
    factory::user::create_user_with_role(db, "other@x.com", UserRole::Borrower).await?;
    factory::user::create_user_with_role(db, "admin@x.com", UserRole::Admin).await?;
    let application = factory::create_loan_application(db, "owner@x.com").await?;

    let permission = [Permission::ApplicationOwner(application.id)];

    let owner = caller("owner@x.com");
    AuthGuard::new(&state, &owner).require(&permission).await?;

    let other = caller("other@x.com");
    assert!(matches!(
        AuthGuard::new(&state, &other).require(&permission).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let admin = caller("admin@x.com");
    AuthGuard::new(&state, &admin).require(&permission).await?;

    Ok(())
}

/// Tests that a missing application is left for the handler to report.
///
/// Expected: Ok(())
#[tokio::test]
async fn missing_application_is_allowed_through() -> Result<(), AppError> {
    let state = role_state().await;
    let db = state.store.connection().await?;
    factory::user::create_user_with_role(db, "owner@x.com", UserRole::Borrower).await?;

    let headers = caller("owner@x.com");
    AuthGuard::new(&state, &headers)
        .require(&[Permission::ApplicationOwner(404)])
        .await?;

    Ok(())
}
