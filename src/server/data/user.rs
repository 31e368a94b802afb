//! User data repository.
//!
//! This module provides the `UserRepository` for reading and inserting `app_user` rows.
//! All access goes through a `StoreGateway`, never the concrete store client.

use sea_orm::DbErr;

use crate::server::{
    data::store::StoreGateway,
    model::user::{CreateUserParam, User},
};

const SELECT_BY_EMAIL: &str =
    "SELECT id, name, email, password_hash FROM app_user WHERE email = $1";

const INSERT_USER: &str = "INSERT INTO app_user (name, email, password_hash) VALUES ($1, $2, $3)";

/// Repository providing store operations for user accounts.
pub struct UserRepository<'a, G: StoreGateway + ?Sized> {
    gateway: &'a G,
}

impl<'a, G: StoreGateway + ?Sized> UserRepository<'a, G> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `gateway` - Store gateway shared with the rest of the server
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Finds a user by exact email match.
    ///
    /// Emails are normalized before they are stored, so callers should normalize the
    /// lookup value the same way.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Store error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let row = self
            .gateway
            .query_one(SELECT_BY_EMAIL, vec![email.into()])
            .await?;

        row.as_ref().map(User::from_row).transpose()
    }

    /// Inserts a user and reads it back.
    ///
    /// # Returns
    /// - `Ok(User)` - The stored user including its generated id
    /// - `Err(DbErr)` - Insert failed (including a unique email violation), or the
    ///   row could not be read back
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        self.gateway
            .execute(
                INSERT_USER,
                vec![
                    param.name.into(),
                    param.email.clone().into(),
                    param.password_hash.into(),
                ],
            )
            .await?;

        self.find_by_email(&param.email)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("app_user with email {}", param.email)))
    }
}
