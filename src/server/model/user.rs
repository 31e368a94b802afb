//! User domain models and parameters.
//!
//! Provides the domain model for registered users and the parameter types the auth
//! service accepts. Conversion to and from wire DTOs happens here so controllers stay
//! thin.

use sea_orm::DbErr;

use crate::{
    model::user::{LoginDto, RegisterUserDto, UserDto},
    server::data::store::Row,
};

/// A registered user as stored in `app_user`.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Auto-incremented primary key.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Normalized (trimmed, lowercased) email address.
    pub email: String,
    /// Credential digest in `scheme$salt$digest` form.
    pub password_hash: String,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The credential digest is dropped.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }

    /// Reads a user from a row selected as `id, name, email, password_hash`.
    ///
    /// # Returns
    /// - `Ok(User)` - All four columns decoded
    /// - `Err(DbErr)` - A column was missing or had an unexpected type
    pub fn from_row(row: &Row) -> Result<Self, DbErr> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            password_hash: row.get(3)?,
        })
    }
}

/// Parameters for registering a new account, as received from the client.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterUserParam {
    pub fn from_dto(dto: RegisterUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
        }
    }
}

/// Parameters for a login attempt, as received from the client.
#[derive(Debug, Clone)]
pub struct LoginParam {
    pub email: String,
    pub password: String,
}

impl LoginParam {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
        }
    }
}

/// Parameters for inserting a user row. Values are already validated and hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
