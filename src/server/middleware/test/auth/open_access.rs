use super::*;

/// Tests that the open policy allows anonymous callers.
///
/// Expected: Ok for every permission without any caller header
#[tokio::test]
async fn allows_anonymous_caller() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let state = test_state(test.into_database().await.unwrap());
    let headers = HeaderMap::new();

    let guard = AuthGuard::new(&state, &headers);

    guard.require(&[Permission::Admin]).await?;
    guard.require(&[Permission::Staff]).await?;
    guard.require(&[Permission::ApplicationOwner(1)]).await?;

    Ok(())
}

/// Tests that the open policy never touches the store.
///
/// Expected: Ok even though no table exists
#[tokio::test]
async fn does_not_consult_store() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let state = test_state_with(
        test.into_database().await.unwrap(),
        Arc::new(OpenAccess),
        Arc::new(FakeGateway::default()),
    );
    let headers = caller("ghost@x.com");

    AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    Ok(())
}
