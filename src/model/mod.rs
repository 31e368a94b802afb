//! Wire types shared by every API endpoint.

pub mod api;
pub mod user;
