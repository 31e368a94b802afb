//! HTTP request handlers.
//!
//! Controllers parse requests into params, call a service, and convert the result to a
//! DTO. Error mapping is left to `AppError`.

pub mod auth;
pub mod health;
