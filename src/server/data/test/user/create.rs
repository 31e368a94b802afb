use super::*;

/// Tests creating a new user.
///
/// Expected: Ok with the generated id and the given fields
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let store = Store::new(test.db.clone().unwrap());
    let repo = UserRepository::new(&store);

    let user = repo
        .create(CreateUserParam {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "sha256$00$11".to_string(),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.name, "Ada");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.password_hash, "sha256$00$11");

    Ok(())
}

/// Tests that the unique email constraint rejects a second insert.
///
/// Expected: Err on the duplicate
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let store = Store::new(db.clone());
    let repo = UserRepository::new(&store);
    let result = repo
        .create(CreateUserParam {
            name: "Someone".to_string(),
            email: "taken@example.com".to_string(),
            password_hash: "sha256$00$11".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
