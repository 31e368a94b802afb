//! Store access for all domain entities.
//!
//! `store` defines the `StoreGateway` capability every repository is written against
//! and the `Store` adapter that implements it over a SeaORM connection pool.
//! Repositories take any `StoreGateway`, so swapping the store client never touches
//! them or the services above.

pub mod store;
pub mod user;

#[cfg(test)]
mod test;
