//! User factory for creating `app_user` rows.

use schema::{AppUser, Query};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// A user row as inserted by the factory.
#[derive(Debug, Clone)]
pub struct CreatedUser {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Factory for creating test users with customizable fields.
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .name("Ada")
///     .email("ada@example.com")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    password_hash: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - name: `"User {id}"`
    /// - email: `"user{id}@example.com"`
    /// - password_hash: a digest no password verifies against
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the row
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            password_hash: "sha256$00$00".to_string(),
        }
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored credential digest.
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Builds and inserts the user row.
    ///
    /// # Returns
    /// - `Ok(CreatedUser)` - Inserted row including its generated id
    /// - `Err(DbErr)` - Database error during insert (for example a duplicate email)
    pub async fn build(self) -> Result<CreatedUser, DbErr> {
        let insert = Query::insert()
            .into_table(AppUser::Table)
            .columns([AppUser::Name, AppUser::Email, AppUser::PasswordHash])
            .values_panic([
                self.name.clone().into(),
                self.email.clone().into(),
                self.password_hash.clone().into(),
            ])
            .to_owned();

        let result = self.db.execute(&insert).await?;

        Ok(CreatedUser {
            id: result.last_insert_id() as i32,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
        })
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<CreatedUser, DbErr> {
    UserFactory::new(db).build().await
}
