use serde::{Deserialize, Serialize};

/// Body of `POST /api/auth/register`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RegisterUserDto {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/login`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Public view of a user. Never carries the credential digest.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}
