use fleet_scheduler::{
    model::auth::{LoginDto, UserDto},
    server::{
        controller::auth::{get_user, login, logout},
        model::session::user::SessionUser,
    },
};

use super::*;

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_login(TEST_USERNAME, TEST_PASSWORD)
        .build()
        .await
}

fn credentials(username: &str, password: &str) -> Json<LoginDto> {
    Json(LoginDto {
        username: username.to_string(),
        password: password.to_string(),
    })
}

#[tokio::test]
/// Expect 200 with the user and the username stored in session after a correct login
async fn logs_in_with_correct_password() -> Result<(), TestError> {
    let test = setup().await?;

    let result = login(
        State(test.state()),
        test.session.clone(),
        credentials(TEST_USERNAME, TEST_PASSWORD),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let user: UserDto = json_body(resp).await;
    assert_eq!(user.username, TEST_USERNAME);

    let in_session = SessionUser::get(&test.session).await.unwrap();
    assert_eq!(in_session.as_deref(), Some(TEST_USERNAME));

    Ok(())
}

#[tokio::test]
/// Expect 401 for a wrong password or an unknown user, leaving the session empty
async fn rejects_wrong_credentials() -> Result<(), TestError> {
    let test = setup().await?;

    for (username, password) in [(TEST_USERNAME, "wrong"), ("intruder", TEST_PASSWORD)] {
        let result = login(
            State(test.state()),
            test.session.clone(),
            credentials(username, password),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    assert!(SessionUser::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect 204 and an empty session after logout
async fn logout_clears_session() -> Result<(), TestError> {
    let test = setup().await?;
    SessionUser::insert(&test.session, TEST_USERNAME).await.unwrap();

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(SessionUser::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect 204 when logging out without anything in session
async fn logout_without_session() -> Result<(), TestError> {
    let test = setup().await?;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::NO_CONTENT);

    Ok(())
}

#[tokio::test]
/// Expect 200 with the logged in user
async fn returns_logged_in_user() -> Result<(), TestError> {
    let test = setup().await?;
    SessionUser::insert(&test.session, TEST_USERNAME).await.unwrap();

    let result = get_user(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let user: UserDto = json_body(resp).await;
    assert_eq!(user.username, TEST_USERNAME);

    Ok(())
}

#[tokio::test]
/// Expect 401 when nobody is logged in
async fn get_user_requires_login() -> Result<(), TestError> {
    let test = setup().await?;

    let result = get_user(test.session.clone()).await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::UNAUTHORIZED
    );

    Ok(())
}
