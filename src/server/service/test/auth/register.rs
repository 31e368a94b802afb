use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use sea_orm::{DbErr, Value};

use super::*;
use crate::server::data::store::{Row, StoreGateway};

/// Gateway whose first lookup reports no row, as if another registration committed
/// between the duplicate check and the insert.
struct MissesFirstLookup {
    store: Store,
    missed: AtomicBool,
}

#[async_trait]
impl StoreGateway for MissesFirstLookup {
    async fn execute(&self, sql: &str, params: Vec<Value>) -> Result<(), DbErr> {
        self.store.execute(sql, params).await
    }

    async fn query_one(&self, sql: &str, params: Vec<Value>) -> Result<Option<Row>, DbErr> {
        if !self.missed.swap(true, Ordering::SeqCst) {
            return Ok(None);
        }
        self.store.query_one(sql, params).await
    }
}

/// Tests registering a new account.
///
/// Verifies the email is normalized, the name trimmed, and the password stored only as
/// a digest that verifies against the original password.
///
/// Expected: Ok with normalized fields
#[tokio::test]
async fn registers_and_normalizes_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let store = Store::new(test.db.clone().unwrap());
    let service = AuthService::new(&store);

    let user = service
        .register(register_param("  Ada  ", " Ada@Example.COM ", "analytical-engine"))
        .await?;

    assert_eq!(user.name, "Ada");
    assert_eq!(user.email, "ada@example.com");
    assert_ne!(user.password_hash, "analytical-engine");
    assert!(password::verify_password("analytical-engine", &user.password_hash)?);

    Ok(())
}

/// Tests that an email already present is rejected, regardless of case.
///
/// Expected: Err(AuthError::EmailTaken)
#[tokio::test]
async fn rejects_registered_email() {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .email("ada@example.com")
        .build()
        .await
        .unwrap();

    let store = Store::new(db.clone());
    let service = AuthService::new(&store);
    let result = service
        .register(register_param("Ada", "ADA@example.com", "analytical-engine"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::EmailTaken))
    ));
}

/// Tests input validation before any store access.
///
/// Expected: Err(AppError::BadRequest) for each invalid input
#[tokio::test]
async fn rejects_invalid_input() {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let store = Store::new(test.db.clone().unwrap());
    let service = AuthService::new(&store);

    for param in [
        register_param("   ", "ada@example.com", "analytical-engine"),
        register_param("Ada", "not-an-email", "analytical-engine"),
        register_param("Ada", "ada@example.com", "short"),
    ] {
        let result = service.register(param).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}

/// Tests that losing a registration race is reported as a taken email.
///
/// The duplicate check passes, so the unique index on `email` rejects the insert.
///
/// Expected: Err(AuthError::EmailTaken)
#[tokio::test]
async fn unique_violation_on_insert_is_email_taken() {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .email("ada@example.com")
        .build()
        .await
        .unwrap();

    let gateway = MissesFirstLookup {
        store: Store::new(db.clone()),
        missed: AtomicBool::new(false),
    };
    let service = AuthService::new(&gateway);
    let result = service
        .register(register_param("Ada", "ada@example.com", "analytical-engine"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::EmailTaken))
    ));
}
