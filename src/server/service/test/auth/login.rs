use super::*;

fn login_param(email: &str, password: &str) -> LoginParam {
    LoginParam {
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Tests logging in with the correct password.
///
/// Expected: Ok with the stored user
#[tokio::test]
async fn logs_in_with_correct_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::user::UserFactory::new(db)
        .email("grace@example.com")
        .password_hash(password::hash_password("cobol-forever"))
        .build()
        .await?;

    let store = Store::new(db.clone());
    let service = AuthService::new(&store);
    let user = service
        .login(login_param("Grace@Example.com", "cobol-forever"))
        .await?;

    assert_eq!(user.id, created.id);
    assert_eq!(user.email, "grace@example.com");

    Ok(())
}

/// Tests that a wrong password and an unknown email produce the same error.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_bad_credentials_uniformly() {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .email("grace@example.com")
        .password_hash(password::hash_password("cobol-forever"))
        .build()
        .await
        .unwrap();

    let store = Store::new(db.clone());
    let service = AuthService::new(&store);

    let wrong_password = service
        .login(login_param("grace@example.com", "fortran-forever"))
        .await;
    let unknown_email = service
        .login(login_param("nobody@example.com", "cobol-forever"))
        .await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_email,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
}

/// Tests that a register/login round trip works end to end through the service.
///
/// Expected: Ok with the same user id
#[tokio::test]
async fn registered_user_can_log_in() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let store = Store::new(test.db.clone().unwrap());
    let service = AuthService::new(&store);

    let registered = service
        .register(register_param("Linus", "linus@example.com", "penguins-rule"))
        .await?;
    let logged_in = service
        .login(login_param("linus@example.com", "penguins-rule"))
        .await?;

    assert_eq!(registered, logged_in);

    Ok(())
}
