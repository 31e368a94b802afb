use sea_orm::SqlErr;

use crate::server::{
    data::{store::StoreGateway, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, LoginParam, RegisterUserParam, User},
    util::password,
};

/// Shortest password accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Service for email/password registration and login.
///
/// Holds only a store gateway; it never sees the concrete store client. No tokens or
/// sessions are issued: a successful login returns the user and nothing else.
pub struct AuthService<'a, G: StoreGateway + ?Sized> {
    gateway: &'a G,
}

impl<'a, G: StoreGateway + ?Sized> AuthService<'a, G> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `gateway` - Store gateway shared with the rest of the server
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Registers a new account.
    ///
    /// Trims the name and email, lowercases the email, validates all three fields, and
    /// stores a salted digest of the password.
    ///
    /// # Returns
    /// - `Ok(User)` - The stored user
    /// - `Err(AppError::BadRequest)` - Empty name, email without `@`, or short password
    /// - `Err(AppError::AuthErr(EmailTaken))` - Email already registered
    /// - `Err(AppError::DbErr)` - Store failure
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        let name = param.name.trim().to_string();
        let email = normalize_email(&param.email);

        if name.is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }
        if !email.contains('@') {
            return Err(AppError::BadRequest("A valid email is required".to_string()));
        }
        if param.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        let user_repo = UserRepository::new(self.gateway);

        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        // A concurrent registration can slip in between the lookup above and this insert;
        // the unique index on `email` decides the race.
        let user = user_repo
            .create(CreateUserParam {
                name,
                email,
                password_hash: password::hash_password(&param.password),
            })
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => AuthError::EmailTaken.into(),
                _ => AppError::from(err),
            })?;

        tracing::info!("Registered user {}", user.id);

        Ok(user)
    }

    /// Checks an email/password pair.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError::InternalErr)` - Stored digest is unreadable
    /// - `Err(AppError::DbErr)` - Store failure
    pub async fn login(&self, param: LoginParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.gateway);

        let Some(user) = user_repo
            .find_by_email(&normalize_email(&param.email))
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify_password(&param.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
