use super::*;

/// Tests finding an existing user by email.
///
/// Expected: Ok with all stored fields populated
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::user::UserFactory::new(db)
        .name("Grace")
        .email("grace@example.com")
        .password_hash("sha256$aa$bb")
        .build()
        .await?;

    let store = Store::new(db.clone());
    let repo = UserRepository::new(&store);
    let user = repo.find_by_email("grace@example.com").await?.unwrap();

    assert_eq!(user.id, created.id);
    assert_eq!(user.name, "Grace");
    assert_eq!(user.email, "grace@example.com");
    assert_eq!(user.password_hash, "sha256$aa$bb");

    Ok(())
}

/// Tests that an unknown email yields None.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::create_user(db).await?;

    let store = Store::new(db.clone());
    let repo = UserRepository::new(&store);

    assert!(repo.find_by_email("missing@example.com").await?.is_none());

    Ok(())
}
